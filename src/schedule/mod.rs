//! Deferred tasks on a virtual clock.
//!
//! The game pauses twice: after a pair is revealed (so the player sees both
//! faces) and after victory (before returning to size selection). Flip
//! animations add short cosmetic steps. Instead of wall-clock timers these
//! are tasks on a [`Scheduler`]; the driver advances virtual time and due
//! tasks fire in order.
//!
//! ```
//! use std::time::Duration;
//! use flag_pairs::schedule::{Scheduler, Task};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(Duration::from_millis(500), Task::ReturnToSetup);
//!
//! assert!(scheduler.pop_due(Duration::from_millis(499)).is_none());
//! let fired = scheduler.pop_due(Duration::from_millis(500)).unwrap();
//! assert_eq!(fired.task, Task::ReturnToSetup);
//! ```

mod clock;
mod queue;
mod task;

pub use clock::VirtualClock;
pub use queue::Scheduler;
pub use task::{AnimationStep, ScheduledTask, Task, TaskId};
