//! Minimal in-process store for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use daftar_shared::types::{ArchivedEntryId, EntryId, PageRequest, PageResponse};

use super::{EntryStore, StoreError};
use crate::entry::{DeletedEntry, Entry, NewEntry};
use crate::filter::EntryFilter;

#[derive(Default)]
pub(crate) struct TestStore {
    entries: Mutex<Vec<Entry>>,
    archived: Mutex<Vec<DeletedEntry>>,
    pub(crate) fail_remove: AtomicBool,
    pub(crate) fail_archive: AtomicBool,
}

impl TestStore {
    pub(crate) fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub(crate) fn archived_count(&self) -> usize {
        self.archived.lock().unwrap().len()
    }

    fn fail(flag: &AtomicBool, op: &str) -> Result<(), StoreError> {
        if flag.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("{op} failed")));
        }
        Ok(())
    }
}

impl EntryStore for TestStore {
    fn list_entries(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Entry>, StoreError> {
        let all = self.all_entries(filter)?;
        let total = all.len() as u64;
        Ok(PageResponse::new(page.slice(&all).to_vec(), page, total))
    }

    fn all_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
        Ok(filter.apply(self.entries.lock().unwrap().iter()))
    }

    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        Ok(self.entries.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    fn insert_entry(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let entry = Entry::from_new(entry, EntryId::new(), Utc::now());
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    fn remove_entry(&self, id: EntryId) -> Result<bool, StoreError> {
        Self::fail(&self.fail_remove, "remove")?;
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        Ok(entries.len() < before)
    }

    fn insert_archived(&self, archived: &DeletedEntry) -> Result<(), StoreError> {
        Self::fail(&self.fail_archive, "archive")?;
        self.archived.lock().unwrap().push(archived.clone());
        Ok(())
    }

    fn get_archived(&self, id: ArchivedEntryId) -> Result<Option<DeletedEntry>, StoreError> {
        Ok(self.archived.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    fn find_archived_by_original(
        &self,
        original: EntryId,
    ) -> Result<Option<DeletedEntry>, StoreError> {
        Ok(self
            .archived
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.original_entry_id == original)
            .cloned())
    }

    fn list_archived(&self) -> Result<Vec<DeletedEntry>, StoreError> {
        Ok(self.archived.lock().unwrap().clone())
    }

    fn purge_archived(&self, id: ArchivedEntryId) -> Result<bool, StoreError> {
        let mut archived = self.archived.lock().unwrap();
        let before = archived.len();
        archived.retain(|a| a.id != id);
        Ok(archived.len() < before)
    }
}
