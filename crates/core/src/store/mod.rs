//! Storage seam for entries and their archive copies.
//!
//! Implemented outside the core (see the `daftar-store` crate). All methods
//! are synchronous and take `&self`.

use std::sync::Arc;

use daftar_shared::AppError;
use daftar_shared::types::{ArchivedEntryId, EntryId, PageRequest, PageResponse};
use thiserror::Error;

use crate::entry::{DeletedEntry, Entry, NewEntry};
use crate::filter::EntryFilter;

/// Errors reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Remote read or write failed.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Record does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Write conflicts with an existing record.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Returns the error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
            Self::NotFound(_) => "STORE_NOT_FOUND",
            Self::Conflict(_) => "STORE_CONFLICT",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Self::Storage(msg),
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Conflict(msg) => Self::Conflict(msg),
        }
    }
}

/// Persistence for active entries and archived copies.
pub trait EntryStore: Send + Sync {
    /// One page of entries matching `filter`, newest first, with the total count.
    fn list_entries(
        &self,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Entry>, StoreError>;

    /// Every entry matching `filter`, newest first.
    fn all_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError>;

    /// Entry by id.
    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, StoreError>;

    /// Persists a new entry, assigning its id and creation time.
    fn insert_entry(&self, entry: NewEntry) -> Result<Entry, StoreError>;

    /// Removes an active entry. Returns false if it did not exist.
    fn remove_entry(&self, id: EntryId) -> Result<bool, StoreError>;

    /// Writes an archive copy.
    fn insert_archived(&self, archived: &DeletedEntry) -> Result<(), StoreError>;

    /// Archive copy by archive id.
    fn get_archived(&self, id: ArchivedEntryId) -> Result<Option<DeletedEntry>, StoreError>;

    /// Archive copy of the given original entry, if one was written.
    fn find_archived_by_original(
        &self,
        original: EntryId,
    ) -> Result<Option<DeletedEntry>, StoreError>;

    /// Every archive copy, in no particular order.
    fn list_archived(&self) -> Result<Vec<DeletedEntry>, StoreError>;

    /// Permanently removes an archive copy. Returns false if it did not exist.
    fn purge_archived(&self, id: ArchivedEntryId) -> Result<bool, StoreError>;
}

macro_rules! forward_entry_store {
    ($($ty:ty),*) => {$(
        impl<S: EntryStore + ?Sized> EntryStore for $ty {
            fn list_entries(
                &self,
                filter: &EntryFilter,
                page: PageRequest,
            ) -> Result<PageResponse<Entry>, StoreError> {
                (**self).list_entries(filter, page)
            }

            fn all_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, StoreError> {
                (**self).all_entries(filter)
            }

            fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
                (**self).get_entry(id)
            }

            fn insert_entry(&self, entry: NewEntry) -> Result<Entry, StoreError> {
                (**self).insert_entry(entry)
            }

            fn remove_entry(&self, id: EntryId) -> Result<bool, StoreError> {
                (**self).remove_entry(id)
            }

            fn insert_archived(&self, archived: &DeletedEntry) -> Result<(), StoreError> {
                (**self).insert_archived(archived)
            }

            fn get_archived(
                &self,
                id: ArchivedEntryId,
            ) -> Result<Option<DeletedEntry>, StoreError> {
                (**self).get_archived(id)
            }

            fn find_archived_by_original(
                &self,
                original: EntryId,
            ) -> Result<Option<DeletedEntry>, StoreError> {
                (**self).find_archived_by_original(original)
            }

            fn list_archived(&self) -> Result<Vec<DeletedEntry>, StoreError> {
                (**self).list_archived()
            }

            fn purge_archived(&self, id: ArchivedEntryId) -> Result<bool, StoreError> {
                (**self).purge_archived(id)
            }
        }
    )*};
}

forward_entry_store!(&S, Arc<S>);

#[cfg(test)]
pub(crate) mod test_store;
