//! # flag-pairs
//!
//! The core of a memory-matching game: pick a board size, get a grid of
//! face-down cards where every picture appears exactly twice, and reveal
//! cards two at a time until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The crate never draws, loads images or sleeps. A UI layer
//!    feeds in reveal requests and clock advances and renders the
//!    [`Notification`]s that come out.
//!
//! 2. **Deterministic**: Boards come from a seedable ChaCha8 generator and
//!    every pause runs on a virtual clock, so a seed plus an input script
//!    replays a game exactly.
//!
//! 3. **Silent misclicks**: Clicking a face-up card, or a third card while a
//!    pair is showing, is a no-op. Only setup can fail.
//!
//! ## Modules
//!
//! - `core`: Coordinates, image ids, RNG, configuration, errors
//! - `board`: Cards, the board and its generator
//! - `schedule`: Virtual clock and deferred tasks
//! - `events`: Notifications for the renderer
//! - `session`: The game state machine

pub mod core;
pub mod board;
pub mod schedule;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, CardStyle, ConfigError, Coord, GameConfig, GameError, GameRng, GameRngState,
    ImageId,
};

pub use crate::board::{generate, Board, Card, CardState};

pub use crate::schedule::{AnimationStep, ScheduledTask, Scheduler, Task, TaskId, VirtualClock};

pub use crate::events::{AnimationPhase, FlipAnimation, Notification};

pub use crate::session::{GameSession, IgnoreReason, PendingSelection, Phase, RevealOutcome};
