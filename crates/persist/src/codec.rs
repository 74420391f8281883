//! Snapshot codec - versioned JSON documents for saved sessions
//!
//! The document mirrors [`SessionSnapshot`] field for field plus a format
//! version, so old builds refuse payloads they cannot interpret instead of
//! guessing. Wire names are camelCase.

use serde::{Deserialize, Serialize};

use flipmatch_core::snapshot::{CardSnapshot, SessionSnapshot};
use flipmatch_types::FaceId;

use crate::error::PersistError;

/// Format version written into every saved document
pub const SNAPSHOT_VERSION: u32 = 1;

/// Wire form of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub face: u16,
    pub revealed: bool,
    pub matched: bool,
}

/// Wire form of a captured session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub version: u32,
    pub columns: u8,
    pub rows: u8,
    pub score: u32,
    #[serde(rename = "timeRemaining")]
    pub time_remaining: u32,
    #[serde(rename = "matchesFound")]
    pub matches_found: u32,
    pub finished: bool,
    pub seed: u32,
    #[serde(rename = "timerLimit")]
    pub timer_limit: u32,
    #[serde(rename = "matchPoints")]
    pub match_points: u32,
    #[serde(rename = "resolutionDelayMs")]
    pub resolution_delay_ms: u32,
    #[serde(rename = "facePool")]
    pub face_pool: u16,
    pub cards: Vec<SavedCard>,
}

impl From<&SessionSnapshot> for SavedSession {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            columns: snapshot.columns,
            rows: snapshot.rows,
            score: snapshot.score,
            time_remaining: snapshot.time_remaining,
            matches_found: snapshot.matches_found,
            finished: snapshot.finished,
            seed: snapshot.seed,
            timer_limit: snapshot.timer_limit,
            match_points: snapshot.match_points,
            resolution_delay_ms: snapshot.resolution_delay_ms,
            face_pool: snapshot.face_pool,
            cards: snapshot
                .cards
                .iter()
                .map(|c| SavedCard {
                    face: c.face.0,
                    revealed: c.revealed,
                    matched: c.matched,
                })
                .collect(),
        }
    }
}

impl SavedSession {
    fn into_snapshot(self) -> SessionSnapshot {
        SessionSnapshot {
            columns: self.columns,
            rows: self.rows,
            score: self.score,
            time_remaining: self.time_remaining,
            matches_found: self.matches_found,
            finished: self.finished,
            seed: self.seed,
            timer_limit: self.timer_limit,
            match_points: self.match_points,
            resolution_delay_ms: self.resolution_delay_ms,
            face_pool: self.face_pool,
            cards: self
                .cards
                .into_iter()
                .map(|c| CardSnapshot {
                    face: FaceId(c.face),
                    revealed: c.revealed,
                    matched: c.matched,
                })
                .collect(),
        }
    }
}

/// Serialize a snapshot into its versioned JSON document
pub fn encode_snapshot(snapshot: &SessionSnapshot) -> Result<String, PersistError> {
    Ok(serde_json::to_string(&SavedSession::from(snapshot))?)
}

/// Parse a JSON document back into a snapshot
///
/// The format version is checked here; semantic validation happens when the
/// snapshot is turned back into a session.
pub fn decode_snapshot(json: &str) -> Result<SessionSnapshot, PersistError> {
    let saved: SavedSession = serde_json::from_str(json)?;
    if saved.version != SNAPSHOT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: saved.version,
            supported: SNAPSHOT_VERSION,
        });
    }
    Ok(saved.into_snapshot())
}
