//! Base-currency conversion and VAT computation.
//!
//! Amounts are converted with the rate table, then net and VAT are each
//! rounded with Banker's Rounding (MidpointNearestEven). Gross is the exact
//! sum of the two rounded parts, so `gross == net + vat` always holds.

use std::str::FromStr;

use daftar_shared::config::CalculationConfig;
use daftar_shared::types::{Currency, Money};
use rust_decimal::prelude::*;
use serde::Serialize;

use super::error::CalculationError;
use super::rates::RateTable;

/// Result of a calculation, in the base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmountBreakdown {
    /// Amount as entered.
    pub source: Money,
    /// Rate applied to reach the base currency.
    pub rate: Decimal,
    /// Base-currency amount before VAT.
    pub net: Decimal,
    /// VAT on the net amount.
    pub vat: Decimal,
    /// `net + vat`.
    pub gross: Decimal,
}

/// Parses raw user input into a positive amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use daftar_core::currency::parse_amount;
///
/// assert_eq!(parse_amount(" 120.50 ").unwrap(), dec!(120.50));
/// assert!(parse_amount("abc").is_err());
/// assert!(parse_amount("0").is_err());
/// ```
pub fn parse_amount(raw: &str) -> Result<Decimal, CalculationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalculationError::InvalidAmount(raw.to_string()));
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CalculationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(CalculationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Converts entered amounts into base-currency net, VAT and gross.
#[derive(Debug, Clone)]
pub struct AmountCalculator {
    table: RateTable,
    decimal_places: u32,
}

impl AmountCalculator {
    /// Creates a calculator over `table`, rounding to `decimal_places`.
    #[must_use]
    pub fn new(table: RateTable, decimal_places: u32) -> Self {
        Self {
            table,
            decimal_places,
        }
    }

    /// Builds a calculator from configuration.
    pub fn from_config(config: &CalculationConfig) -> Result<Self, CalculationError> {
        Ok(Self::new(
            RateTable::from_config(&config.rate_table)?,
            config.decimal_places,
        ))
    }

    /// The rate table in use.
    #[must_use]
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Computes net, VAT and gross for an already validated amount.
    ///
    /// VAT applies only to the taxable base currency and only when
    /// `disable_vat` is false.
    ///
    /// # Errors
    ///
    /// * `AmountOutOfRange` if a product or the gross sum overflows `Decimal`
    /// * `NonPositiveAmount` if the net amount rounds to zero
    pub fn calculate(
        &self,
        amount: Decimal,
        currency: Currency,
        disable_vat: bool,
    ) -> Result<AmountBreakdown, CalculationError> {
        let out_of_range = || CalculationError::AmountOutOfRange(amount);
        let rate = self.table.rate(currency);
        let net = self.round(amount.checked_mul(rate).ok_or_else(out_of_range)?);
        if net.is_zero() {
            return Err(CalculationError::NonPositiveAmount(net));
        }
        let vat = if currency.is_taxable() && !disable_vat {
            self.round(net.checked_mul(self.table.vat_rate()).ok_or_else(out_of_range)?)
        } else {
            Decimal::ZERO
        };
        let gross = net.checked_add(vat).ok_or_else(out_of_range)?;

        Ok(AmountBreakdown {
            source: Money::new(amount, currency),
            rate,
            net,
            vat,
            gross,
        })
    }

    /// Parses `raw` and computes the breakdown.
    pub fn calculate_input(
        &self,
        raw: &str,
        currency: Currency,
        disable_vat: bool,
    ) -> Result<AmountBreakdown, CalculationError> {
        self.calculate(parse_amount(raw)?, currency, disable_vat)
    }

    fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointNearestEven)
    }
}

impl Default for AmountCalculator {
    fn default() -> Self {
        Self::new(RateTable::builtin(), 2)
    }
}
