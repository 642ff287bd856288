//! Board generation and card storage.
//!
//! ## Key Types
//!
//! - `Card`: One card with its image and visibility
//! - `CardState`: Hidden, Revealed or Matched
//! - `Board`: The N×N grid, guaranteed to hold every image exactly twice
//!
//! Use [`Board::generate`] (or the raw-edge [`generate`]) for a random
//! board and [`Board::from_images`] for a fixed layout.

pub mod card;
pub mod generator;
pub mod layout;

pub use card::{Card, CardState};
pub use generator::generate;
pub use layout::Board;
