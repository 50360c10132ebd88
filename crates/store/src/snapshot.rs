//! JSON snapshots of a store's contents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use daftar_core::entry::{DeletedEntry, Entry};
use daftar_core::store::StoreError;

/// Errors reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File could not be read or written.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a valid snapshot.
    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot contents violate a store invariant.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Every active entry and archive copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Active entries.
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Archive copies.
    #[serde(default)]
    pub deleted_entries: Vec<DeletedEntry>,
}

impl Snapshot {
    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Writes the snapshot to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
