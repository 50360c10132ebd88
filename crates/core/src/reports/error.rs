//! Report error types.

use chrono::NaiveDate;
use daftar_shared::AppError;
use thiserror::Error;

/// Errors that can occur while resolving report periods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Month outside the supported calendar.
    #[error("Month out of range: {year}-{month:02}")]
    DateOutOfRange {
        /// Year.
        year: i64,
        /// Month number.
        month: u32,
    },
}

impl ReportError {
    /// Returns the error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
