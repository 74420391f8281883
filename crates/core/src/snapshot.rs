//! Plain-data session snapshot, decoupled from live state
//!
//! Tokens, flags, and counters only; resolver state is never captured
//! because snapshots are legal only while the resolver is idle.

use thiserror::Error;

use crate::card::Card;
use crate::config::{ConfigError, SessionConfig};
use crate::types::FaceId;

/// Snapshot attempted while a resolution is pending; defer the save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("snapshot blocked while a resolution is pending")]
pub struct SnapshotBlocked;

/// Snapshot data that cannot reconstruct a coherent session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("snapshot holds {actual} cards but the grid needs {expected}")]
    CardCountMismatch { expected: usize, actual: usize },
    #[error("matches found {found} exceeds total pairs {total}")]
    MatchesOverflow { found: u32, total: u32 },
    #[error("recorded configuration is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSnapshot {
    pub face: FaceId,
    pub revealed: bool,
    pub matched: bool,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        Self {
            face: card.face(),
            revealed: card.revealed(),
            matched: card.matched(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub columns: u8,
    pub rows: u8,
    pub score: u32,
    pub time_remaining: u32,
    pub matches_found: u32,
    pub finished: bool,
    /// RNG state at capture time; a restored session restarts from here
    pub seed: u32,
    pub timer_limit: u32,
    pub match_points: u32,
    pub resolution_delay_ms: u32,
    pub face_pool: u16,
    /// Per-card state in grid order
    pub cards: Vec<CardSnapshot>,
}

impl SessionSnapshot {
    /// The configuration recorded in the snapshot
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            columns: self.columns,
            rows: self.rows,
            timer_limit: self.timer_limit,
            match_points: self.match_points,
            resolution_delay_ms: self.resolution_delay_ms,
            face_pool: self.face_pool,
        }
    }

    /// Total pairs implied by the recorded grid shape
    pub fn total_matches(&self) -> u32 {
        self.columns as u32 * self.rows as u32 / 2
    }

    /// Reject snapshots that cannot reconstruct a coherent session
    pub fn validate(&self) -> Result<(), RestoreError> {
        self.config().validate()?;

        let expected = self.columns as usize * self.rows as usize;
        if self.cards.len() != expected {
            return Err(RestoreError::CardCountMismatch {
                expected,
                actual: self.cards.len(),
            });
        }

        let total = self.total_matches();
        if self.matches_found > total {
            return Err(RestoreError::MatchesOverflow {
                found: self.matches_found,
                total,
            });
        }

        Ok(())
    }
}
