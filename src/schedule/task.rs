//! Deferred work items.

use std::cmp::Ordering;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::events::FlipAnimation;

/// Unique identifier for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Create a new task ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A scheduled step of a flip animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationStep {
    /// Swap the visible face partway through the flip.
    SwapFace,
    /// End the flip.
    Finish,
}

/// What to do when a task comes due.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Compare the two revealed cards and match or hide them.
    ResolvePair([Coord; 2]),

    /// Leave the won game and go back to size selection.
    ReturnToSetup,

    /// Advance a flip animation on one card.
    Animate {
        coord: Coord,
        animation: FlipAnimation,
        step: AnimationStep,
    },
}

/// A task with its due time.
///
/// Ordered by due time, then by id, so tasks due at the same instant fire
/// in the order they were scheduled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Unique identifier for this entry.
    pub id: TaskId,

    /// Virtual time at which the task fires.
    pub due: Duration,

    /// The work to do.
    pub task: Task,
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
