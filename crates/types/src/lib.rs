//! Shared types module - plain data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI adapters, host drivers).
//!
//! # Grid Dimensions
//!
//! A session plays on a rectangular grid of cards:
//!
//! - **Columns/rows**: each between 2 and 8 (inclusive)
//! - **Card count**: `columns * rows`, always even (cards come in pairs)
//! - **Pairs**: `columns * rows / 2`, drawn from the configured face pool
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TIMER_TICK_MS` | 1000 | One session-timer unit (one second) |
//! | `DEFAULT_RESOLUTION_DELAY_MS` | 500 | Pair visibility delay before resolution |
//!
//! # Session Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 4 | Grid columns |
//! | `DEFAULT_ROWS` | 4 | Grid rows |
//! | `DEFAULT_TIMER_LIMIT` | 60 | Countdown start, in seconds |
//! | `DEFAULT_MATCH_POINTS` | 5 | Score awarded per resolved pair |
//! | `DEFAULT_FACE_POOL` | 32 | Distinct face values available |
//!
//! # Examples
//!
//! ```
//! use flipmatch_types::{FaceId, SelectOutcome, SessionEvent, MAX_GRID_DIM};
//!
//! // Face tokens are indices into the adapter's face pool
//! let face = FaceId(3);
//! assert_eq!(face.as_index(), 3);
//!
//! // Selection outcomes distinguish accepted picks from silent no-ops
//! assert!(SelectOutcome::Pending.accepted());
//! assert!(!SelectOutcome::Ignored.accepted());
//!
//! // Events carry a stable name for logging
//! assert_eq!(SessionEvent::SessionWon.as_str(), "sessionWon");
//!
//! // The largest supported grid is 8x8
//! assert_eq!(MAX_GRID_DIM, 8);
//! ```

/// Smallest supported grid dimension (2 columns or rows)
pub const MIN_GRID_DIM: u8 = 2;

/// Largest supported grid dimension (8 columns or rows)
pub const MAX_GRID_DIM: u8 = 8;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One session-timer unit in milliseconds (the countdown decrements per second)
pub const TIMER_TICK_MS: u32 = 1000;

/// Default grid columns
pub const DEFAULT_COLUMNS: u8 = 4;

/// Default grid rows
pub const DEFAULT_ROWS: u8 = 4;

/// Default countdown start value in seconds
pub const DEFAULT_TIMER_LIMIT: u32 = 60;

/// Default score awarded for each resolved pair
pub const DEFAULT_MATCH_POINTS: u32 = 5;

/// Default pair visibility delay before a resolution commits (milliseconds)
pub const DEFAULT_RESOLUTION_DELAY_MS: u32 = 500;

/// Default number of distinct face values the adapter provides
///
/// Sized so the largest supported grid (8x8 = 32 pairs) is always buildable.
pub const DEFAULT_FACE_POOL: u16 = 32;

/// Upper bound on events a single `tick` or `select` call can emit
///
/// A resolution emits at most `ResolutionComplete` plus one terminal event,
/// so 4 leaves headroom without heap allocation in the tick path.
pub const MAX_EVENTS_PER_TICK: usize = 4;

/// Identifier of a card's printed value
///
/// A face id is an index into the adapter-owned face pool (sprite table,
/// glyph list, whatever the UI maps faces to). Exactly two cards in a grid
/// share any given face id; together they form the pair the player hunts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId(pub u16);

impl FaceId {
    /// Index into the adapter's face pool
    pub fn as_index(&self) -> usize {
        self.0 as usize
    }
}

/// Index of a card within the grid, in row-major order
///
/// Cards never carry back-references to their session; every component
/// addresses them through this index.
pub type CardId = usize;

/// Result of a `select` call
///
/// Rejected picks are a silent no-op by design: matched cards, already
/// revealed cards, picks during an active resolution, and picks after the
/// session finished all return `Ignored` without mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The pick changed nothing (expected input race, not an error)
    Ignored,
    /// First card of a pair revealed; waiting for the second pick
    Pending,
    /// Second card revealed; the resolver is now armed
    ReadyToResolve,
}

impl SelectOutcome {
    /// Whether the pick mutated the session
    pub fn accepted(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored)
    }
}

/// State-change notification emitted by the session
///
/// Adapters (render, audio, host drivers) re-render or cue off these.
/// Events are queued inside the session and drained with `take_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A buffered pair was compared and committed
    ResolutionComplete {
        /// True when the two cards shared a face and stayed face-up
        matched: bool,
    },
    /// Every pair found before the timer ran out
    SessionWon,
    /// The countdown reached zero first
    SessionTimedOut,
}

impl SessionEvent {
    /// Stable camelCase name for logs and wire payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEvent::ResolutionComplete { .. } => "resolutionComplete",
            SessionEvent::SessionWon => "sessionWon",
            SessionEvent::SessionTimedOut => "sessionTimedOut",
        }
    }
}

/// Per-card state exposed to adapters
///
/// A face-down card still reports its face id; hiding it from the player is
/// the renderer's job, not the data model's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub face: FaceId,
    pub revealed: bool,
    pub matched: bool,
}

/// Complete render-facing state of a session at one instant
///
/// Available at any time, including mid-resolution (unlike a persistence
/// snapshot). `cards` is in grid order, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub columns: u8,
    pub rows: u8,
    pub score: u32,
    pub time_remaining: u32,
    pub matches_found: u32,
    pub total_matches: u32,
    pub finished: bool,
    pub resolving: bool,
    pub episode: u32,
    pub cards: Vec<CardView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_game_parameter_parity() {
        // Defaults mirror the original game build: 60s timer, 5 points per
        // pair, half-second reveal before a pair resolves.
        assert_eq!(DEFAULT_TIMER_LIMIT, 60);
        assert_eq!(DEFAULT_MATCH_POINTS, 5);
        assert_eq!(DEFAULT_RESOLUTION_DELAY_MS, 500);
        assert_eq!(TIMER_TICK_MS, 1000);
    }

    #[test]
    fn face_pool_covers_largest_grid() {
        let max_pairs = (MAX_GRID_DIM as u16) * (MAX_GRID_DIM as u16) / 2;
        assert!(DEFAULT_FACE_POOL >= max_pairs);
    }

    #[test]
    fn select_outcome_accepted() {
        assert!(!SelectOutcome::Ignored.accepted());
        assert!(SelectOutcome::Pending.accepted());
        assert!(SelectOutcome::ReadyToResolve.accepted());
    }

    #[test]
    fn event_names_are_stable() {
        let ev = SessionEvent::ResolutionComplete { matched: true };
        assert_eq!(ev.as_str(), "resolutionComplete");
        assert_eq!(SessionEvent::SessionWon.as_str(), "sessionWon");
        assert_eq!(SessionEvent::SessionTimedOut.as_str(), "sessionTimedOut");
    }
}
