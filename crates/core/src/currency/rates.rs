//! Versioned exchange-rate and VAT table.

use std::collections::BTreeMap;

use daftar_shared::config::RateTableConfig;
use daftar_shared::types::Currency;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::CalculationError;

/// Fixed multipliers from each currency to the base currency, plus the VAT rate.
///
/// Base currencies always convert at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTable {
    version: String,
    vat_rate: Decimal,
    jod: Decimal,
    usd: Decimal,
    eur: Decimal,
}

impl RateTable {
    /// Creates a table, validating every rate.
    pub fn new(
        version: impl Into<String>,
        vat_rate: Decimal,
        jod: Decimal,
        usd: Decimal,
        eur: Decimal,
    ) -> Result<Self, CalculationError> {
        if vat_rate.is_sign_negative() || vat_rate >= Decimal::ONE {
            return Err(CalculationError::InvalidVatRate(vat_rate));
        }
        for (currency, rate) in [(Currency::Jod, jod), (Currency::Usd, usd), (Currency::Eur, eur)] {
            if rate <= Decimal::ZERO {
                return Err(CalculationError::InvalidRate {
                    currency: currency.as_str().to_string(),
                    rate,
                });
            }
        }
        Ok(Self {
            version: version.into(),
            vat_rate,
            jod,
            usd,
            eur,
        })
    }

    /// The built-in table: JOD 5.4, USD 3.75, EUR 4.21, VAT 15%.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: "default".to_string(),
            vat_rate: Decimal::new(15, 2),
            jod: Decimal::new(54, 1),
            usd: Decimal::new(375, 2),
            eur: Decimal::new(421, 2),
        }
    }

    /// Builds a table from configuration.
    ///
    /// Keys are currency codes, matched case-insensitively. Every supported
    /// currency must be present; base currencies must be exactly 1.
    pub fn from_config(config: &RateTableConfig) -> Result<Self, CalculationError> {
        let mut rates = BTreeMap::new();
        for (code, rate) in &config.rates {
            let currency: Currency = code
                .parse()
                .map_err(|_| CalculationError::UnknownCurrency(code.clone()))?;
            rates.insert(currency, *rate);
        }

        let lookup = |currency: Currency| {
            rates
                .get(&currency)
                .copied()
                .ok_or_else(|| CalculationError::MissingRate {
                    version: config.version.clone(),
                    currency: currency.as_str().to_string(),
                })
        };

        for base in Currency::ALL.into_iter().filter(Currency::is_base) {
            let rate = lookup(base)?;
            if rate != Decimal::ONE {
                return Err(CalculationError::InvalidRate {
                    currency: base.as_str().to_string(),
                    rate,
                });
            }
        }

        Self::new(
            config.version.clone(),
            config.vat_rate,
            lookup(Currency::Jod)?,
            lookup(Currency::Usd)?,
            lookup(Currency::Eur)?,
        )
    }

    /// Multiplier from `currency` to the base currency.
    #[must_use]
    pub fn rate(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Sar | Currency::SarNoVat => Decimal::ONE,
            Currency::Jod => self.jod,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }

    /// VAT rate applied to taxable amounts.
    #[must_use]
    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate
    }

    /// Version label.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
