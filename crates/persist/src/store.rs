//! Slot store - save files on disk
//!
//! Each slot is one JSON document at `slot_<n>.json` under the store
//! directory. Writes land in a scratch file first and are renamed into
//! place, so a crash mid-write never leaves a truncated slot behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use flipmatch_core::{Session, SessionSnapshot};

use crate::codec::{decode_snapshot, encode_snapshot};
use crate::error::PersistError;

/// Numbered save slots backed by one JSON file each
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.dir.join(format!("slot_{}.json", slot))
    }

    /// Write a snapshot into a slot, replacing whatever was there
    pub fn save(&self, slot: u8, snapshot: &SessionSnapshot) -> Result<(), PersistError> {
        let json = encode_snapshot(snapshot)?;
        let path = self.slot_path(slot);
        let scratch = path.with_extension("json.tmp");
        fs::write(&scratch, json.as_bytes())?;
        fs::rename(&scratch, &path)?;
        Ok(())
    }

    /// Capture and save a live session in one step
    ///
    /// Fails without touching the slot when the session has a resolution
    /// pending.
    pub fn save_session(&self, slot: u8, session: &Session) -> Result<(), PersistError> {
        let snapshot = session.snapshot()?;
        self.save(slot, &snapshot)
    }

    /// Read a slot back; `None` when the slot has never been written
    pub fn load(&self, slot: u8) -> Result<Option<SessionSnapshot>, PersistError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(json) => Ok(Some(decode_snapshot(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Rebuild a session from a slot
    pub fn load_session(&self, slot: u8) -> Result<Option<Session>, PersistError> {
        match self.load(slot)? {
            Some(snapshot) => Ok(Some(Session::restore(&snapshot)?)),
            None => Ok(None),
        }
    }

    /// Remove a slot; removing an empty slot is not an error
    pub fn delete(&self, slot: u8) -> Result<(), PersistError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self, slot: u8) -> bool {
        self.slot_path(slot).exists()
    }
}
