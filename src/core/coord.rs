//! Grid coordinates and image identifiers.

use serde::{Deserialize, Serialize};

/// Position of a card on the board.
///
/// `x` is the row and `y` the column; cards are stored row-major, so the
/// flat index of `(x, y)` on an `edge`-wide board is `x * edge + y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate of the flat row-major `index` on an `edge`-wide board.
    #[must_use]
    pub const fn from_index(index: usize, edge: usize) -> Self {
        Self {
            x: index / edge,
            y: index % edge,
        }
    }

    /// Flat row-major index, or `None` if outside an `edge`×`edge` board.
    #[must_use]
    pub const fn index(self, edge: usize) -> Option<usize> {
        if self.x < edge && self.y < edge {
            Some(self.x * edge + self.y)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifier of a picture in the image pool.
///
/// The engine never looks at pictures; two cards match when their ids are
/// equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u16);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}
