//! Soft-delete workflow: archive, remove, purge and reconcile.
//!
//! # Modules
//!
//! - `types` - Lifecycle states, actions and outcomes
//! - `error` - Workflow-specific error types
//! - `service` - Delete, purge, archive log and reconciliation

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::WorkflowError;
pub use service::SoftDeleteService;
pub use types::{
    ArchiveAction, ArchiveState, Confirmation, DeleteOutcome, ReconcileFailure,
    ReconciliationReport,
};
