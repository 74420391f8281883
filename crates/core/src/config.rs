//! Session configuration - grid shape, timing, and scoring parameters
//!
//! Validation happens once, at session creation (or snapshot restore); a
//! `Session` never exists with an invalid configuration.

use thiserror::Error;

use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_FACE_POOL, DEFAULT_MATCH_POINTS, DEFAULT_RESOLUTION_DELAY_MS,
    DEFAULT_ROWS, DEFAULT_TIMER_LIMIT, MAX_GRID_DIM, MIN_GRID_DIM,
};

/// Rejected session configuration
///
/// Fatal at creation time: the caller gets the error and no partial session
/// is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A grid dimension falls outside the supported range
    #[error("grid dimension {value} outside supported range 2..=8")]
    DimensionOutOfRange { value: u8 },
    /// The grid cannot hold pairs: odd card count, or fewer than two cards
    #[error("card count {total} is not an even count of two or more")]
    InvalidCardCount { total: u16 },
    /// Fewer distinct face values than pairs to fill
    #[error("face pool holds {available} values but {required} are needed")]
    InsufficientFaces { required: u16, available: u16 },
}

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Grid columns (2..=8)
    pub columns: u8,
    /// Grid rows (2..=8)
    pub rows: u8,
    /// Countdown start value in seconds
    pub timer_limit: u32,
    /// Score awarded per resolved pair
    pub match_points: u32,
    /// Pair visibility delay before resolution commits, in milliseconds
    pub resolution_delay_ms: u32,
    /// Number of distinct face values the adapter provides
    pub face_pool: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            timer_limit: DEFAULT_TIMER_LIMIT,
            match_points: DEFAULT_MATCH_POINTS,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            face_pool: DEFAULT_FACE_POOL,
        }
    }
}

impl SessionConfig {
    /// Total cards on the grid
    pub fn total_cards(&self) -> u16 {
        self.columns as u16 * self.rows as u16
    }

    /// Total pairs to find before the session is won
    pub fn total_matches(&self) -> u32 {
        self.total_cards() as u32 / 2
    }

    /// Check dimensions, pairing, and face pool coverage
    pub fn validate(&self) -> Result<(), ConfigError> {
        for value in [self.columns, self.rows] {
            if !(MIN_GRID_DIM..=MAX_GRID_DIM).contains(&value) {
                return Err(ConfigError::DimensionOutOfRange { value });
            }
        }

        let total = self.total_cards();
        if total % 2 != 0 {
            return Err(ConfigError::InvalidCardCount { total });
        }

        let required = total / 2;
        if self.face_pool < required {
            return Err(ConfigError::InsufficientFaces {
                required,
                available: self.face_pool,
            });
        }

        Ok(())
    }
}
