//! Entry service errors.

use daftar_shared::AppError;
use thiserror::Error;

use crate::currency::CalculationError;
use crate::filter::FilterError;
use crate::reports::ReportError;
use crate::session::SessionError;
use crate::store::StoreError;
use crate::workflow::WorkflowError;

/// Errors returned by [`super::EntryService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// No signed-in user.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Project name is empty.
    #[error("Project name is required")]
    EmptyProjectName,

    /// Amount input rejected or rate table unusable.
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Filter rejected.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Report period could not be resolved.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Soft-delete failure.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EntryError {
    /// Returns the error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Session(err) => err.error_code(),
            Self::EmptyProjectName => "EMPTY_PROJECT_NAME",
            Self::Calculation(err) => err.error_code(),
            Self::Filter(err) => err.error_code(),
            Self::Report(err) => err.error_code(),
            Self::Workflow(err) => err.error_code(),
            Self::Store(err) => err.error_code(),
        }
    }
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::Session(e) => e.into(),
            EntryError::EmptyProjectName => Self::Validation(err.to_string()),
            EntryError::Calculation(e) => e.into(),
            EntryError::Filter(e) => e.into(),
            EntryError::Report(e) => e.into(),
            EntryError::Workflow(e) => e.into(),
            EntryError::Store(e) => e.into(),
        }
    }
}
