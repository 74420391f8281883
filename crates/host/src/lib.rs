//! Async host for flipmatch sessions
//!
//! Runs a [`flipmatch_core::Session`] on a tokio task and exposes a
//! synchronous handle for driving it: picks, restart, save slots, and a
//! broadcast stream of session events. The task advances the session clock
//! at a fixed tick; callers never touch the session directly.

pub mod runtime;

pub use runtime::{HostConfig, HostError, SessionHost};
