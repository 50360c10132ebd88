//! Soft-delete lifecycle types.
//!
//! An entry moves through these states:
//! - Active → Archived (delete: archive copy written, original removed)
//! - Archived → Gone (purge: archive copy removed, irreversible)
//!
//! There is no restore.

use std::fmt;

use daftar_shared::types::EntryId;
use serde::{Deserialize, Serialize};

use crate::entry::DeletedEntry;
use crate::workflow::error::WorkflowError;

/// Lifecycle state of an entry under soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveState {
    /// Listed and counted.
    Active,
    /// Removed from listings; an archive copy exists.
    Archived,
    /// Archive copy purged.
    Gone,
}

impl ArchiveState {
    /// Returns the string representation of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Gone => "gone",
        }
    }

    /// Applies `action`, returning the next state.
    pub fn apply(self, action: ArchiveAction) -> Result<Self, WorkflowError> {
        match (self, action) {
            (Self::Active, ArchiveAction::Delete) => Ok(Self::Archived),
            (Self::Archived, ArchiveAction::Purge) => Ok(Self::Gone),
            (from, action) => Err(WorkflowError::InvalidTransition { from, action }),
        }
    }
}

impl fmt::Display for ArchiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soft-delete transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveAction {
    /// Archive then remove an active entry.
    Delete,
    /// Permanently remove an archive copy.
    Purge,
}

impl fmt::Display for ArchiveAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Delete => "delete",
            Self::Purge => "purge",
        })
    }
}

/// Caller's answer to an irreversible-operation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    /// Proceed.
    Confirmed,
    /// Do nothing.
    Declined,
}

impl Confirmation {
    /// Returns true if the caller confirmed.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed { Self::Confirmed } else { Self::Declined }
    }
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The archive copy now holding the entry.
    pub archived: DeletedEntry,
    /// True if an archive copy from an earlier attempt was reused.
    pub reused_archive: bool,
}

/// An archived entry whose original could not be removed during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileFailure {
    /// The still-active original.
    pub entry_id: EntryId,
    /// Store error message.
    pub reason: String,
}

/// Archived-but-not-removed entries found by reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    /// Archive copies whose original entry is still active.
    pub stranded: Vec<DeletedEntry>,
    /// Originals removed, when run with `apply`.
    pub removed: Vec<EntryId>,
    /// Originals that could not be removed.
    pub failed: Vec<ReconcileFailure>,
}

impl ReconciliationReport {
    /// Returns true if nothing was stranded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.stranded.is_empty()
    }
}
