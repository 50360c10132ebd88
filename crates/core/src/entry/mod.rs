//! Finance entries and their archived copies.

pub mod types;

pub use types::{DeletedEntry, Entry, EntryStatus, EntryType, Location, NewEntry};

#[cfg(test)]
pub(crate) mod fixtures;
