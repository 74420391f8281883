//! Save-file persistence for flipmatch sessions
//!
//! Turns the core's plain-data snapshots into versioned JSON documents and
//! keeps them in numbered slots on disk:
//!
//! - [`codec`]: snapshot <-> JSON with a format version gate
//! - [`store`]: one file per slot, replaced atomically on save
//!
//! Capture preconditions live in the core; this crate only refuses payloads
//! it cannot decode or that fail session validation on the way back in.
//!
//! # Example
//!
//! ```no_run
//! use flipmatch_core::{Session, SessionConfig};
//! use flipmatch_persist::SlotStore;
//!
//! let store = SlotStore::open("saves").unwrap();
//! let session = Session::new(SessionConfig::default(), 7).unwrap();
//!
//! store.save_session(1, &session).unwrap();
//! let restored = store.load_session(1).unwrap();
//! assert!(restored.is_some());
//! ```

pub mod codec;
pub mod error;
pub mod store;

pub use codec::{decode_snapshot, encode_snapshot, SavedCard, SavedSession, SNAPSHOT_VERSION};
pub use error::PersistError;
pub use store::SlotStore;
