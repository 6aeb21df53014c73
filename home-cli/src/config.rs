//! `home-calc.toml` configuration.
//!
//! Every section is optional. Values left out fall back to the defaults the
//! calculator forms start with, and command-line flags override both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use home_core::SavingsAccountType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "home-calc.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub mortgage: MortgageDefaults,
    pub savings: SavingsDefaults,
    pub renovation: RenovationDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,

    /// Log file, appended to in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageDefaults {
    pub home_price: Decimal,

    /// `"20%"` or `"$80,000"`.
    pub down_payment: String,

    pub loan_term_years: u32,
    pub annual_interest_rate_percent: Decimal,
    pub annual_property_tax_percent: Decimal,
    pub annual_home_insurance: Decimal,
    pub annual_pmi: Decimal,
    pub monthly_hoa: Decimal,
    pub annual_other_costs: Decimal,
}

impl Default for MortgageDefaults {
    fn default() -> Self {
        Self {
            home_price: Decimal::from(400_000),
            down_payment: "20%".to_string(),
            loan_term_years: 30,
            annual_interest_rate_percent: Decimal::new(6908, 3),
            annual_property_tax_percent: Decimal::new(12, 1),
            annual_home_insurance: Decimal::from(1500),
            annual_pmi: Decimal::ZERO,
            monthly_hoa: Decimal::ZERO,
            annual_other_costs: Decimal::from(4000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsDefaults {
    pub property_price: Decimal,
    pub down_payment_percent: Decimal,
    pub saving_years: u32,
    pub annual_interest_rate_percent: Decimal,
    pub account_type: SavingsAccountType,
}

impl Default for SavingsDefaults {
    fn default() -> Self {
        Self {
            property_price: Decimal::from(400_000),
            down_payment_percent: Decimal::from(20),
            saving_years: 5,
            annual_interest_rate_percent: Decimal::from(3),
            account_type: SavingsAccountType::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenovationDefaults {
    pub home_value: Decimal,
    pub city_assessed_value: Decimal,

    /// CSV file replacing the built-in renovation options.
    pub catalog: Option<PathBuf>,
}

impl Default for RenovationDefaults {
    fn default() -> Self {
        Self {
            home_value: Decimal::from(500_000),
            city_assessed_value: Decimal::from(500_000),
            catalog: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it exists,
    /// otherwise the built-in defaults.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
