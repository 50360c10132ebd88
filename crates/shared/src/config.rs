//! Application configuration management.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty configuration is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Amount calculation configuration.
    #[serde(default)]
    pub calculation: CalculationConfig,
    /// Pagination configuration.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Analytics configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Amount calculation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationConfig {
    /// Decimal places that net and VAT amounts are rounded to.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Exchange rates and VAT rate.
    #[serde(default)]
    pub rate_table: RateTableConfig,
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            rate_table: RateTableConfig::default(),
        }
    }
}

/// Versioned table of exchange rates to the base currency plus the VAT rate.
///
/// Rates are keyed by currency code (`"JOD"`, `"USD"`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableConfig {
    /// Version label of the rate table.
    #[serde(default = "default_rate_version")]
    pub version: String,
    /// VAT rate applied to the taxable currency (0.15 = 15%).
    #[serde(default = "default_vat_rate")]
    pub vat_rate: Decimal,
    /// Multiplier to the base currency, by currency code.
    #[serde(default = "default_rates")]
    pub rates: BTreeMap<String, Decimal>,
}

fn default_rate_version() -> String {
    "default".to_string()
}

fn default_vat_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn default_rates() -> BTreeMap<String, Decimal> {
    BTreeMap::from([
        ("SAR".to_string(), Decimal::ONE),
        ("SAR_NO_VAT".to_string(), Decimal::ONE),
        ("JOD".to_string(), Decimal::new(54, 1)),
        ("USD".to_string(), Decimal::new(375, 2)),
        ("EUR".to_string(), Decimal::new(421, 2)),
    ])
}

impl Default for RateTableConfig {
    fn default() -> Self {
        Self {
            version: default_rate_version(),
            vat_rate: default_vat_rate(),
            rates: default_rates(),
        }
    }
}

/// Pagination configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Entries per page in listings.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Page-number buttons shown in the pager.
    #[serde(default = "default_visible_pages")]
    pub visible_pages: u32,
}

fn default_per_page() -> u32 {
    10
}

fn default_visible_pages() -> u32 {
    5
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            visible_pages: default_visible_pages(),
        }
    }
}

/// Analytics configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of calendar months in the trailing trend series.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_trend_months() -> u32 {
    6
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            trend_months: default_trend_months(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `DAFTAR__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("DAFTAR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has bad values.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
