//! Persistence error types.

use flipmatch_core::snapshot::{RestoreError, SnapshotBlocked};
use thiserror::Error;

/// Errors from save-file operations.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Capture was attempted while a resolution was pending.
    #[error("save refused: {0}")]
    Blocked(#[from] SnapshotBlocked),

    /// Payload is not valid snapshot JSON.
    #[error("malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Payload was written by an incompatible format version.
    #[error("unsupported snapshot version {found}, this build reads version {supported}")]
    UnsupportedVersion {
        /// Version found in the payload.
        found: u32,
        /// Version this build writes and reads.
        supported: u32,
    },

    /// Decoded data fails session validation.
    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] RestoreError),

    /// Slot file could not be read or written.
    #[error("slot i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_display() {
        let err = PersistError::UnsupportedVersion {
            found: 9,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "unsupported snapshot version 9, this build reads version 1"
        );
    }

    #[test]
    fn test_blocked_display_comes_from_core() {
        let err = PersistError::Blocked(SnapshotBlocked);
        assert!(err.to_string().contains("resolution"));
    }
}
