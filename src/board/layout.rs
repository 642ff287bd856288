//! The board: an N×N grid of cards stored row-major.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardState};
use crate::core::{BoardSize, ConfigError, Coord, ImageId};

/// An N×N grid of paired cards.
///
/// ## Invariant
///
/// The board holds exactly `size.pair_count()` distinct images and every
/// image appears on exactly two cards. Constructors enforce this, and so
/// does deserialization; nothing after construction changes a card's image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: BoardSize,
    /// Row-major: index `x * edge + y`.
    cards: Vec<Card>,
}

/// Wire shape of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    cards: Vec<Card>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = ConfigError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let images: Vec<ImageId> = repr.cards.iter().map(|card| card.image).collect();
        let mut board = Board::from_images(repr.size, images)?;

        for (slot, card) in board.cards.iter_mut().zip(repr.cards) {
            if card.coord != slot.coord {
                return Err(ConfigError::InvalidLayout(format!(
                    "card for {} stored at {}",
                    card.coord, slot.coord
                )));
            }
            slot.state = card.state;
        }

        // Pairs match together or not at all.
        for [a, b] in board.pairs() {
            let matched = |coord| board.card(coord).is_some_and(Card::is_matched);
            if matched(a) != matched(b) {
                return Err(ConfigError::InvalidLayout(format!(
                    "only one of {a} and {b} is matched"
                )));
            }
        }

        Ok(board)
    }
}

impl Board {
    /// Build a board from a row-major list of images.
    ///
    /// Fails with [`ConfigError::InvalidLayout`] unless the list has one
    /// entry per cell and every image occurs exactly twice.
    pub fn from_images(size: BoardSize, images: Vec<ImageId>) -> Result<Self, ConfigError> {
        if images.len() != size.card_count() {
            return Err(ConfigError::InvalidLayout(format!(
                "{} board needs {} cards, got {}",
                size,
                size.card_count(),
                images.len()
            )));
        }

        let mut counts: FxHashMap<ImageId, usize> = FxHashMap::default();
        for image in &images {
            *counts.entry(*image).or_default() += 1;
        }
        if let Some((image, count)) = counts.iter().find(|&(_, &count)| count != 2) {
            return Err(ConfigError::InvalidLayout(format!(
                "{image} appears {count} times, expected 2"
            )));
        }

        let edge = size.edge();
        let cards = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| Card::new(Coord::from_index(index, edge), image))
            .collect();

        Ok(Self { size, cards })
    }

    /// Board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Edge length N.
    #[must_use]
    pub fn edge(&self) -> usize {
        self.size.edge()
    }

    /// All cards, row-major.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Boards are never empty; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.index(self.edge()).is_some()
    }

    /// Get the card at `coord`.
    #[must_use]
    pub fn card(&self, coord: Coord) -> Option<&Card> {
        coord.index(self.edge()).and_then(|i| self.cards.get(i))
    }

    pub(crate) fn card_mut(&mut self, coord: Coord) -> Option<&mut Card> {
        let edge = self.edge();
        coord.index(edge).and_then(move |i| self.cards.get_mut(i))
    }

    /// Set a card's state. Returns the previous state, or `None` if the
    /// coordinate is off the board.
    pub(crate) fn set_state(&mut self, coord: Coord, state: CardState) -> Option<CardState> {
        self.card_mut(coord)
            .map(|card| std::mem::replace(&mut card.state, state))
    }

    /// Coordinate of the other card with the same image.
    #[must_use]
    pub fn pair_of(&self, coord: Coord) -> Option<Coord> {
        let image = self.card(coord)?.image;
        self.cards
            .iter()
            .find(|card| card.image == image && card.coord != coord)
            .map(|card| card.coord)
    }

    /// Both coordinates of every pair, ordered by each pair's first card.
    #[must_use]
    pub fn pairs(&self) -> Vec<[Coord; 2]> {
        let mut first_seen: FxHashMap<ImageId, Coord> = FxHashMap::default();
        let mut pairs = Vec::with_capacity(self.size.pair_count());
        for card in &self.cards {
            if let Some(first) = first_seen.remove(&card.image) {
                pairs.push([first, card.coord]);
            } else {
                first_seen.insert(card.image, card.coord);
            }
        }
        pairs.sort_unstable();
        pairs
    }

    /// Coordinates of cards in the given state.
    pub fn coords_in_state(&self, state: CardState) -> impl Iterator<Item = Coord> + '_ {
        self.cards
            .iter()
            .filter(move |card| card.state == state)
            .map(|card| card.coord)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    /// Victory condition: every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}
