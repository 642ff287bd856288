//! Notifications for the rendering layer.
//!
//! The session never draws anything. Every visible change is pushed as a
//! `Notification`; the embedding UI drains the queue and turns each one
//! into DOM or widget updates.

use serde::{Deserialize, Serialize};

use crate::board::CardState;
use crate::core::{BoardSize, CardStyle, Coord};

/// Which way a card is flipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipAnimation {
    /// Face down to face up.
    ShowCard,
    /// Face up to face down.
    HideCard,
}

impl FlipAnimation {
    /// Card state the face shows once the swap has happened.
    #[must_use]
    pub const fn target_state(self) -> CardState {
        match self {
            FlipAnimation::ShowCard => CardState::Revealed,
            FlipAnimation::HideCard => CardState::Hidden,
        }
    }
}

/// Progress of a flip animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationPhase {
    /// The flip begins; start the CSS animation.
    Started,
    /// The card is edge-on; swap the face image.
    FaceSwapped,
    /// The flip is over; remove the animation.
    Finished,
}

/// Something the renderer should show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A new board is in play. Every card starts face down.
    BoardReady { size: BoardSize, style: CardStyle },

    /// A card changed state.
    CardChanged { coord: Coord, state: CardState },

    /// A flip animation advanced.
    Animation {
        coord: Coord,
        animation: FlipAnimation,
        phase: AnimationPhase,
    },

    /// A matched card should no longer be drawn.
    CardVanished { coord: Coord },

    /// Every card is matched.
    Victory,

    /// The board is gone; show the size selector again.
    Reset,
}

impl Notification {
    /// The card this notification is about, if any.
    #[must_use]
    pub fn coord(&self) -> Option<Coord> {
        match self {
            Notification::CardChanged { coord, .. }
            | Notification::Animation { coord, .. }
            | Notification::CardVanished { coord } => Some(*coord),
            Notification::BoardReady { .. } | Notification::Victory | Notification::Reset => None,
        }
    }

    /// Check if this is the victory signal.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, Notification::Victory)
    }
}
