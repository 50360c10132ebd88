//! Storage backends for Daftar.
//!
//! This crate provides:
//! - [`InMemoryStore`], a concurrent [`EntryStore`](daftar_core::store::EntryStore)
//!   with failure injection for exercising partial writes
//! - [`Snapshot`], a JSON export of entries and archive copies

pub mod memory;
pub mod snapshot;

pub use memory::{InMemoryStore, StoreOperation};
pub use snapshot::{Snapshot, SnapshotError};
