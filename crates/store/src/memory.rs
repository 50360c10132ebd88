//! Concurrent in-memory entry store.

use std::cmp::Reverse;

use chrono::Utc;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::{DashMap, DashSet};
use tracing::debug;

use daftar_core::entry::{DeletedEntry, Entry, NewEntry};
use daftar_core::filter::{EntryFilter, sort_newest_first};
use daftar_core::store::{EntryStore, StoreError};
use daftar_shared::types::{ArchivedEntryId, EntryId, PageRequest, PageResponse};

use crate::snapshot::Snapshot;

/// Store operations that can be made to fail on their next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Entry listing and queries.
    ReadEntries,
    /// [`EntryStore::insert_entry`].
    InsertEntry,
    /// [`EntryStore::remove_entry`].
    RemoveEntry,
    /// [`EntryStore::insert_archived`].
    InsertArchived,
    /// Archive lookups and listing.
    ReadArchived,
    /// [`EntryStore::purge_archived`].
    PurgeArchived,
}

/// Entries and archive copies held in concurrent maps.
///
/// At most one archive copy exists per original entry.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<EntryId, Entry>,
    archived: DashMap<ArchivedEntryId, DeletedEntry>,
    archived_by_original: DashMap<EntryId, ArchivedEntryId>,
    failures: DashSet<StoreOperation>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        let store = Self::new();
        for entry in snapshot.entries {
            store.entries.insert(entry.id, entry);
        }
        for archived in &snapshot.deleted_entries {
            store.insert_archived(archived)?;
        }
        Ok(store)
    }

    /// Copies the current contents, entries newest first and archive copies
    /// most recently deleted first.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut entries: Vec<Entry> = self.entries.iter().map(|r| r.value().clone()).collect();
        sort_newest_first(&mut entries);
        let mut deleted_entries: Vec<DeletedEntry> =
            self.archived.iter().map(|r| r.value().clone()).collect();
        deleted_entries.sort_by_key(|archived| Reverse(archived.deleted_at));
        Snapshot {
            entries,
            deleted_entries,
        }
    }

    /// Makes the next call of `operation` fail with [`StoreError::Unavailable`].
    pub fn fail_next(&self, operation: StoreOperation) {
        self.failures.insert(operation);
    }

    /// Number of active entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of archive copies.
    #[must_use]
    pub fn archived_count(&self) -> usize {
        self.archived.len()
    }

    fn check(&self, operation: StoreOperation) -> Result<(), StoreError> {
        if self.failures.remove(&operation).is_some() {
            debug!(?operation, "Injected store failure");
            return Err(StoreError::Unavailable(format!("{operation:?} failed")));
        }
        Ok(())
    }
}

impl EntryStore for InMemoryStore {
    fn list_entries(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Entry>, StoreError> {
        let matched = self.all_entries(filter)?;
        let total = matched.len() as u64;
        Ok(PageResponse::new(page.slice(&matched).to_vec(), page, total))
    }

    fn all_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
        self.check(StoreOperation::ReadEntries)?;
        let mut matched: Vec<Entry> = self
            .entries
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect();
        sort_newest_first(&mut matched);
        Ok(matched)
    }

    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        self.check(StoreOperation::ReadEntries)?;
        Ok(self.entries.get(&id).map(|r| r.value().clone()))
    }

    fn insert_entry(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        self.check(StoreOperation::InsertEntry)?;
        let entry = Entry::from_new(entry, EntryId::new(), Utc::now());
        self.entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    fn remove_entry(&self, id: EntryId) -> Result<bool, StoreError> {
        self.check(StoreOperation::RemoveEntry)?;
        Ok(self.entries.remove(&id).is_some())
    }

    fn insert_archived(&self, archived: &DeletedEntry) -> Result<(), StoreError> {
        self.check(StoreOperation::InsertArchived)?;
        match self.archived_by_original.entry(archived.original_entry_id) {
            MapEntry::Occupied(existing) => Err(StoreError::Conflict(format!(
                "entry {} already archived as {}",
                archived.original_entry_id,
                existing.get()
            ))),
            MapEntry::Vacant(slot) => {
                self.archived.insert(archived.id, archived.clone());
                slot.insert(archived.id);
                Ok(())
            }
        }
    }

    fn get_archived(&self, id: ArchivedEntryId) -> Result<Option<DeletedEntry>, StoreError> {
        self.check(StoreOperation::ReadArchived)?;
        Ok(self.archived.get(&id).map(|r| r.value().clone()))
    }

    fn find_archived_by_original(
        &self,
        original: EntryId,
    ) -> Result<Option<DeletedEntry>, StoreError> {
        self.check(StoreOperation::ReadArchived)?;
        let Some(archive_id) = self.archived_by_original.get(&original).map(|r| *r.value()) else {
            return Ok(None);
        };
        Ok(self.archived.get(&archive_id).map(|r| r.value().clone()))
    }

    fn list_archived(&self) -> Result<Vec<DeletedEntry>, StoreError> {
        self.check(StoreOperation::ReadArchived)?;
        Ok(self.archived.iter().map(|r| r.value().clone()).collect())
    }

    fn purge_archived(&self, id: ArchivedEntryId) -> Result<bool, StoreError> {
        self.check(StoreOperation::PurgeArchived)?;
        let Some((_, archived)) = self.archived.remove(&id) else {
            return Ok(false);
        };
        self.archived_by_original
            .remove_if(&archived.original_entry_id, |_, archive_id| *archive_id == id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daftar_core::entry::{EntryStatus, EntryType, Location};
    use daftar_shared::types::{Currency, UserId};
    use rust_decimal::Decimal;

    fn new_entry(day: u32) -> NewEntry {
        NewEntry {
            user_id: UserId::new(),
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            project_name: format!("Project {day}"),
            entry_type: EntryType::Income,
            currency: Currency::SarNoVat,
            amount_net: Decimal::from(day),
            vat_amount: Decimal::ZERO,
            amount_gross: Decimal::from(day),
            status: EntryStatus::Paid,
            location: Location::Jordan,
            disable_vat: false,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryStore::new();
        let entry = store.insert_entry(new_entry(3)).unwrap();
        assert_eq!(store.get_entry(entry.id).unwrap(), Some(entry));
        assert_eq!(store.entry_count(), 1);
    }

    #[test]
    fn test_remove_reports_absence() {
        let store = InMemoryStore::new();
        let entry = store.insert_entry(new_entry(3)).unwrap();
        assert!(store.remove_entry(entry.id).unwrap());
        assert!(!store.remove_entry(entry.id).unwrap());
    }

    #[test]
    fn test_duplicate_archive_is_conflict() {
        let store = InMemoryStore::new();
        let entry = store.insert_entry(new_entry(3)).unwrap();
        let actor = UserId::new();

        store
            .insert_archived(&DeletedEntry::archive(entry.clone(), actor, Utc::now()))
            .unwrap();
        let err = store
            .insert_archived(&DeletedEntry::archive(entry, actor, Utc::now()))
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.archived_count(), 1);
    }

    #[test]
    fn test_purge_clears_original_index() {
        let store = InMemoryStore::new();
        let entry = store.insert_entry(new_entry(3)).unwrap();
        let archived = DeletedEntry::archive(entry.clone(), UserId::new(), Utc::now());
        store.insert_archived(&archived).unwrap();

        assert!(store.purge_archived(archived.id).unwrap());
        assert_eq!(store.find_archived_by_original(entry.id).unwrap(), None);
        assert!(!store.purge_archived(archived.id).unwrap());
    }

    #[test]
    fn test_fail_next_fires_once() {
        let store = InMemoryStore::new();
        store.fail_next(StoreOperation::InsertEntry);

        let err = store.insert_entry(new_entry(1)).unwrap_err();
        assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
        assert!(store.insert_entry(new_entry(1)).is_ok());
    }

    #[test]
    fn test_list_entries_pages_newest_first() {
        let store = InMemoryStore::new();
        for day in 1..=12 {
            store.insert_entry(new_entry(day)).unwrap();
        }
        let page = store
            .list_entries(&EntryFilter::new(), PageRequest::new(2, 10))
            .unwrap();
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.total_pages, 2);
        let days: Vec<_> = page.data.iter().map(|e| e.amount_net).collect();
        assert_eq!(days, vec![Decimal::from(2), Decimal::from(1)]);
    }
}
