//! Core session logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and timing logic.
//! It has **zero dependencies** on UI, persistence I/O, or async runtimes,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical card layouts
//! - **Testable**: Comprehensive unit tests for all session rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`card`]: Single card state with the matched-is-terminal rule
//! - [`config`]: Session parameters with validation
//! - [`deck`]: Paired, shuffled deck construction
//! - [`grid`]: Row-major card storage addressed by [`types::CardId`]
//! - [`resolver`]: Delayed match resolution countdown
//! - [`rng`]: Seedable linear congruential generator and shuffle
//! - [`selection`]: Two-pick selection buffer
//! - [`session`]: Complete session state machine
//! - [`snapshot`]: Plain-data captures for persistence
//! - [`timer`]: One-second countdown over arbitrary tick deltas
//!
//! # Session Rules
//!
//! - **Paired deck**: Every face appears on exactly two cards
//! - **Two-pick turns**: The third pick is ignored until the pair resolves
//! - **Delayed resolution**: Both cards stay visible for a configurable
//!   delay (500ms by default) before the pair commits or rolls back
//! - **Scoring**: A fixed number of points per matched pair
//! - **Countdown**: The session times out when the timer reaches zero
//!
//! # Example
//!
//! ```
//! use flipmatch_core::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default(), 12345).unwrap();
//!
//! // Pick two cards; the pair resolves after the delay elapses
//! session.select(0);
//! session.select(1);
//! session.tick(500);
//!
//! assert!(!session.is_resolving());
//! for event in session.take_events() {
//!     println!("{}", event.as_str());
//! }
//! ```
//!
//! # Timing
//!
//! The session is advanced by calling [`Session::tick`] with elapsed
//! milliseconds. Hosts may tick at any cadence; the resolver delay and the
//! one-second timer both accumulate deltas internally, so a single large
//! delta and many small ones produce the same state.

pub mod card;
pub mod config;
pub mod deck;
pub mod grid;
pub mod resolver;
pub mod rng;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use flipmatch_types as types;

// Re-export commonly used types for convenience
pub use card::Card;
pub use config::{ConfigError, SessionConfig};
pub use grid::Grid;
pub use resolver::Resolver;
pub use rng::SessionRng;
pub use selection::SelectionBuffer;
pub use session::Session;
pub use snapshot::{CardSnapshot, RestoreError, SessionSnapshot, SnapshotBlocked};
pub use timer::CountdownTimer;
