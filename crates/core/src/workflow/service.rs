//! Soft-delete operations over an [`EntryStore`].
//!
//! Delete is two store writes (archive copy, then removal) and is not atomic.
//! The original entry id is the idempotency key: a retry after a failed
//! removal reuses the existing archive copy instead of writing a second one.

use std::cmp::Reverse;

use chrono::Utc;
use daftar_shared::types::{ArchivedEntryId, EntryId};
use tracing::{debug, info, warn};

use crate::entry::DeletedEntry;
use crate::session::SessionContext;
use crate::store::EntryStore;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{
    ArchiveAction, ArchiveState, Confirmation, DeleteOutcome, ReconcileFailure,
    ReconciliationReport,
};

/// Stateless service for the archive/purge lifecycle.
pub struct SoftDeleteService;

impl SoftDeleteService {
    /// Archives an active entry owned by the signed-in actor and removes the
    /// original.
    ///
    /// Requires a signed-in actor; without one nothing is read or written.
    /// Entries owned by another user are reported as not found.
    ///
    /// # Errors
    ///
    /// * `MissingActor` if nobody is signed in
    /// * `EntryNotFound` if the actor has no such entry
    /// * `InvalidTransition` if the entry was already deleted
    /// * `PartialDelete` if the archive copy exists but removal failed
    pub fn delete<S: EntryStore + ?Sized>(
        store: &S,
        session: &SessionContext,
        entry_id: EntryId,
    ) -> Result<DeleteOutcome, WorkflowError> {
        let actor = session
            .require_actor()
            .map_err(|_| WorkflowError::MissingActor)?;

        let existing = store
            .find_archived_by_original(entry_id)?
            .filter(|archived| archived.entry.user_id == actor.user_id);
        let entry = store
            .get_entry(entry_id)?
            .filter(|entry| entry.user_id == actor.user_id);

        let state = match (&entry, &existing) {
            (Some(_), _) => ArchiveState::Active,
            (None, Some(_)) => ArchiveState::Archived,
            (None, None) => return Err(WorkflowError::EntryNotFound(entry_id)),
        };
        state.apply(ArchiveAction::Delete)?;
        let Some(entry) = entry else {
            // Only an active entry passes the transition check.
            return Err(WorkflowError::EntryNotFound(entry_id));
        };

        let (archived, reused_archive) = match existing {
            Some(archived) => {
                warn!(
                    entry_id = %entry_id,
                    archive_id = %archived.id,
                    "Reusing archive copy from an earlier delete attempt"
                );
                (archived, true)
            }
            None => {
                let archived = DeletedEntry::archive(entry, actor.user_id, Utc::now());
                store.insert_archived(&archived)?;
                (archived, false)
            }
        };

        match store.remove_entry(entry_id) {
            Ok(removed) => {
                if !removed {
                    debug!(entry_id = %entry_id, "Entry already removed");
                }
            }
            Err(e) => {
                warn!(
                    entry_id = %entry_id,
                    archive_id = %archived.id,
                    error = %e,
                    "Entry archived but not removed"
                );
                return Err(WorkflowError::PartialDelete {
                    entry_id,
                    archive_id: archived.id,
                    reason: e.to_string(),
                });
            }
        }

        info!(
            entry_id = %entry_id,
            archive_id = %archived.id,
            deleted_by = %actor.user_id,
            "Entry deleted"
        );

        Ok(DeleteOutcome {
            archived,
            reused_archive,
        })
    }

    /// Permanently removes an archive copy.
    ///
    /// # Errors
    ///
    /// * `PurgeNotConfirmed` unless `confirmation` is `Confirmed`; nothing is touched
    /// * `ArchivedEntryNotFound` if the copy does not exist
    pub fn purge<S: EntryStore + ?Sized>(
        store: &S,
        archive_id: ArchivedEntryId,
        confirmation: Confirmation,
    ) -> Result<DeletedEntry, WorkflowError> {
        if !confirmation.is_confirmed() {
            debug!(archive_id = %archive_id, "Purge declined");
            return Err(WorkflowError::PurgeNotConfirmed);
        }

        let archived = store
            .get_archived(archive_id)?
            .ok_or(WorkflowError::ArchivedEntryNotFound(archive_id))?;
        ArchiveState::Archived.apply(ArchiveAction::Purge)?;

        if !store.purge_archived(archive_id)? {
            return Err(WorkflowError::ArchivedEntryNotFound(archive_id));
        }

        info!(
            archive_id = %archive_id,
            entry_id = %archived.original_entry_id,
            "Archived entry purged"
        );
        Ok(archived)
    }

    /// Archive copies, most recently deleted first.
    pub fn archive_log<S: EntryStore + ?Sized>(
        store: &S,
    ) -> Result<Vec<DeletedEntry>, WorkflowError> {
        let mut log = store.list_archived()?;
        log.sort_by_key(|archived| Reverse(archived.deleted_at));
        Ok(log)
    }

    /// Finds archive copies whose original is still active.
    ///
    /// With `apply`, removes those originals; failures are collected in the
    /// report rather than aborting the scan.
    pub fn reconcile<S: EntryStore + ?Sized>(
        store: &S,
        apply: bool,
    ) -> Result<ReconciliationReport, WorkflowError> {
        let mut report = ReconciliationReport::default();

        for archived in store.list_archived()? {
            if store.get_entry(archived.original_entry_id)?.is_none() {
                continue;
            }
            warn!(
                entry_id = %archived.original_entry_id,
                archive_id = %archived.id,
                "Archived entry is still active"
            );

            if apply {
                match store.remove_entry(archived.original_entry_id) {
                    Ok(_) => report.removed.push(archived.original_entry_id),
                    Err(e) => report.failed.push(ReconcileFailure {
                        entry_id: archived.original_entry_id,
                        reason: e.to_string(),
                    }),
                }
            }
            report.stranded.push(archived);
        }

        info!(
            stranded = report.stranded.len(),
            removed = report.removed.len(),
            failed = report.failed.len(),
            "Reconciliation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
