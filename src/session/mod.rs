//! The game state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup --start()--> Playing --last pair matched--> Won --victory delay--> Setup
//!   ^                   |
//!   +-----reset()-------+
//! ```
//!
//! ## Reveal cycle
//!
//! 1. `reveal()` turns a hidden card face up and adds it to the selection
//! 2. The second reveal schedules a resolution after the resolve delay
//! 3. Further reveals are ignored until the resolution fires
//! 4. The resolution matches both cards or flips both back
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use flag_pairs::core::{BoardSize, Coord, GameRng};
//! use flag_pairs::session::{GameSession, Phase};
//!
//! let mut session = GameSession::default();
//! session.start(BoardSize::Four, &mut GameRng::new(7)).unwrap();
//!
//! // Play perfectly using the board's own pair list.
//! let pairs = session.board().unwrap().pairs();
//! for [a, b] in pairs {
//!     session.reveal(a);
//!     session.reveal(b);
//!     session.advance(Duration::from_secs(1));
//! }
//! assert_eq!(session.phase(), Phase::Won);
//!
//! session.run_until_idle();
//! assert_eq!(session.phase(), Phase::Setup);
//! ```

mod game;
mod outcome;

pub use game::{GameSession, PendingSelection};
pub use outcome::{IgnoreReason, Phase, RevealOutcome};
