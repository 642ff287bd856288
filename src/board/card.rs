//! A single card on the board.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, ImageId};

/// Visibility of a card.
///
/// Transitions: `Hidden → Revealed → Matched`, or `Revealed → Hidden` when
/// the pair turns out not to match. `Matched` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down, can be revealed.
    #[default]
    Hidden,
    /// Face up, waiting for the pair to resolve.
    Revealed,
    /// Paired up and removed from play.
    Matched,
}

/// A card instance on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Where the card sits.
    pub coord: Coord,

    /// Picture on the face. Exactly one other card shares it.
    pub image: ImageId,

    /// Current visibility.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    pub fn new(coord: Coord, image: ImageId) -> Self {
        Self {
            coord,
            image,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Check whether two cards show the same picture.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.image == other.image
    }
}
