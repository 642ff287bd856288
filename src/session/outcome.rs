//! Session phases and reveal results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the session is in the game lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No board; waiting for a size to be picked.
    #[default]
    Setup,
    /// A board is in play.
    Playing,
    /// Every card is matched; the return to setup is scheduled.
    Won,
}

/// Why a reveal request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No game is in progress.
    NotPlaying,
    /// The coordinate is off the board.
    OutOfBounds,
    /// The card is already face up or matched.
    NotHidden,
    /// Two cards are already waiting to resolve.
    SelectionFull,
}

/// Result of a reveal request.
///
/// Ignored requests are normal during play (double clicks, clicks while a
/// pair is showing) and leave the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The card is face up; one more card can be revealed.
    Revealed,
    /// The card completed a pair, which resolves at the given virtual time.
    PairPending { resolves_at: Duration },
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl RevealOutcome {
    /// Check whether the request changed anything.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, RevealOutcome::Ignored(_))
    }
}
