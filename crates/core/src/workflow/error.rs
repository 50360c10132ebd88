//! Soft-delete workflow errors.

use daftar_shared::AppError;
use daftar_shared::types::{ArchivedEntryId, EntryId};
use thiserror::Error;

use crate::store::StoreError;
use crate::workflow::types::{ArchiveAction, ArchiveState};

/// Errors that can occur during soft-delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// No signed-in user to attribute the delete to.
    #[error("A signed-in user is required to delete entries")]
    MissingActor,

    /// Entry not found.
    #[error("Entry {0} not found")]
    EntryNotFound(EntryId),

    /// Archive copy not found.
    #[error("Archived entry {0} not found")]
    ArchivedEntryNotFound(ArchivedEntryId),

    /// Purge was not confirmed by the caller.
    #[error("Purge requires explicit confirmation")]
    PurgeNotConfirmed,

    /// Action not allowed from the current state.
    #[error("Cannot {action} an entry that is {from}")]
    InvalidTransition {
        /// Current state.
        from: ArchiveState,
        /// Attempted action.
        action: ArchiveAction,
    },

    /// Archive copy was written but the original could not be removed.
    #[error("Entry {entry_id} archived as {archive_id} but not removed: {reason}")]
    PartialDelete {
        /// The still-active original.
        entry_id: EntryId,
        /// The archive copy.
        archive_id: ArchivedEntryId,
        /// Store error message.
        reason: String,
    },

    /// Storage failure before any change was made.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorkflowError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingActor => "MISSING_ACTOR",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::ArchivedEntryNotFound(_) => "ARCHIVED_ENTRY_NOT_FOUND",
            Self::PurgeNotConfirmed => "PURGE_NOT_CONFIRMED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::PartialDelete { .. } => "PARTIAL_DELETE",
            Self::Store(err) => err.error_code(),
        }
    }
}

impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::MissingActor => Self::Unauthorized(err.to_string()),
            WorkflowError::EntryNotFound(_) | WorkflowError::ArchivedEntryNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            WorkflowError::PurgeNotConfirmed => Self::ConfirmationRequired(err.to_string()),
            WorkflowError::InvalidTransition { .. } => Self::Conflict(err.to_string()),
            WorkflowError::PartialDelete { .. } => Self::Storage(err.to_string()),
            WorkflowError::Store(store) => store.into(),
        }
    }
}
