//! Outbound events.
//!
//! The session reports every visible change as a [`Notification`]. The
//! rendering collaborator drains them in order; nothing is ever pulled
//! from the UI except reveal requests.

pub mod notification;

pub use notification::{AnimationPhase, FlipAnimation, Notification};
