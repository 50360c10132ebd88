//! Amount calculation errors.

use daftar_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating input or configuring the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Raw input is empty or not a number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount parsed but is zero or negative.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Converted amount does not fit in a `Decimal`.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    /// Currency code not recognized.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Rate table has no entry for a supported currency.
    #[error("Rate table {version} has no rate for {currency}")]
    MissingRate {
        /// Rate table version.
        version: String,
        /// Currency code without a rate.
        currency: String,
    },

    /// Configured rate is unusable.
    #[error("Invalid rate {rate} for {currency}")]
    InvalidRate {
        /// Currency code.
        currency: String,
        /// Rejected rate.
        rate: Decimal,
    },

    /// VAT rate outside `[0, 1)`.
    #[error("Invalid VAT rate: {0}")]
    InvalidVatRate(Decimal),
}

impl CalculationError {
    /// Returns the error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::MissingRate { .. } => "MISSING_RATE",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::InvalidVatRate(_) => "INVALID_VAT_RATE",
        }
    }

    /// Returns true if the error comes from user input rather than configuration.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::NonPositiveAmount(_)
                | Self::AmountOutOfRange(_)
                | Self::UnknownCurrency(_)
        )
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        if err.is_input_error() {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}
