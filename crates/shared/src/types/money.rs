//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., riyals, dollars).
    pub amount: Decimal,
    /// Currency the amount is expressed in.
    pub currency: Currency,
}

/// Currencies an entry can be recorded in.
///
/// `Sar` and `SarNoVat` are both the base currency; only `Sar` is taxable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    /// Saudi Riyal, VAT applies.
    Sar,
    /// Saudi Riyal recorded without VAT.
    SarNoVat,
    /// Jordanian Dinar
    Jod,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Self; 5] = [Self::Sar, Self::SarNoVat, Self::Jod, Self::Usd, Self::Eur];

    /// Returns the stored code (e.g. `"SAR_NO_VAT"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sar => "SAR",
            Self::SarNoVat => "SAR_NO_VAT",
            Self::Jod => "JOD",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Returns true for the base currency variants (no conversion needed).
    #[must_use]
    pub const fn is_base(&self) -> bool {
        matches!(self, Self::Sar | Self::SarNoVat)
    }

    /// Returns true if VAT can apply to amounts in this currency.
    #[must_use]
    pub const fn is_taxable(&self) -> bool {
        matches!(self, Self::Sar)
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAR" => Ok(Self::Sar),
            "SAR_NO_VAT" => Ok(Self::SarNoVat),
            "JOD" => Ok(Self::Jod),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
