//! Time-ordered task queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use super::clock::VirtualClock;
use super::task::{ScheduledTask, Task, TaskId};

/// Queue of deferred tasks on a virtual clock.
///
/// ## Behavior
///
/// - `schedule()`: Queues a task `delay` after the current time
/// - `pop_due()`: Removes the earliest task due by a deadline and moves the
///   clock to its due time
/// - `clear()`: Drops every queued task; the clock keeps its time
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    clock: VirtualClock,
    queue: BinaryHeap<Reverse<ScheduledTask>>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Queue `task` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        let due = self.clock.now().saturating_add(delay);
        self.queue.push(Reverse(ScheduledTask { id, due, task }));
        id
    }

    /// Due time of the next task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Remove the earliest task if it is due at or before `deadline`.
    ///
    /// The clock moves to the task's due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<ScheduledTask> {
        if self.next_due()? > deadline {
            return None;
        }
        self.pop_next()
    }

    /// Remove the earliest task regardless of time, moving the clock to it.
    pub fn pop_next(&mut self) -> Option<ScheduledTask> {
        let Reverse(entry) = self.queue.pop()?;
        self.clock.advance_to(entry.due);
        Some(entry)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_clock(&mut self, time: Duration) {
        self.clock.advance_to(time);
    }

    /// Number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued tasks in firing order.
    #[must_use]
    pub fn pending(&self) -> Vec<&ScheduledTask> {
        let mut entries: Vec<_> = self.queue.iter().map(|Reverse(entry)| entry).collect();
        entries.sort();
        entries
    }

    /// Drop every queued task.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
