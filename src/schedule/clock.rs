//! Virtual time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Monotonic virtual clock, measured from session creation.
///
/// Time only moves when the driver says so, which keeps every delay in the
/// game reproducible in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualClock {
    now: Duration,
}

impl VirtualClock {
    /// A clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move to `time`. Moving backwards is ignored.
    pub fn advance_to(&mut self, time: Duration) {
        self.now = self.now.max(time);
    }

    /// Move forward by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.now = self.now.saturating_add(delta);
    }
}
