//! Core bookkeeping logic for Daftar.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence and identity are reached through the [`store::EntryStore`] seam and
//! an explicit [`session::SessionContext`].
//!
//! # Modules
//!
//! - `entry` - Finance entry and archived entry records
//! - `currency` - Rate table and amount calculation (conversion + VAT)
//! - `filter` - Sparse filter predicates over entries
//! - `reports` - Summaries, month buckets, trend series, report periods
//! - `workflow` - Soft-delete, purge, and reconciliation
//! - `session` - Current-actor context with change notifications
//! - `store` - Storage abstraction
//! - `entries` - Page-level entry operations tying the above together

pub mod currency;
pub mod entries;
pub mod entry;
pub mod filter;
pub mod reports;
pub mod session;
pub mod store;
pub mod workflow;
