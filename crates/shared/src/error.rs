//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Module-level errors convert into this taxonomy at the boundary to the
/// presentation layer, which shows the message and leaves prior state unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    /// No signed-in user, or the session has ended.
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (bad amount, empty project name, inverted date range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation refused until the caller confirms it.
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    /// Conflict (e.g., duplicate archive record).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Remote storage read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code reported to callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ConfirmationRequired(_) => "CONFIRMATION_REQUIRED",
            Self::Conflict(_) => "CONFLICT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the same call may succeed once storage recovers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
