//! Core types: coordinates, image ids, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! the state machine.

pub mod coord;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{Coord, ImageId};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardSize, CardStyle, GameConfig, DEFAULT_IMAGE_POOL, MAX_IMAGE_POOL};
pub use error::{ConfigError, GameError, Result};
