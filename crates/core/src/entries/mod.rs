//! Page-level entry operations over a store.

pub mod error;
pub mod service;
pub mod types;

pub use error::EntryError;
pub use service::EntryService;
pub use types::{EntryForm, EntryPage, PeriodReport};
