use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::builder::{ProductBuilder, Validate};
use crate::inputs::IntoDepositDecimal;
use crate::types::DepositError;

/// Product bounds a deposit must satisfy before a balance is projected.
///
/// The defaults are the standard retail term-deposit domain: principal in
/// (1,000, 1,500,000) exclusive, rate in (0, 15) percent exclusive, term
/// in [3, 60] months inclusive. Each bound can be overridden for products
/// with a different accepted domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepositConfig {
    /// Exclusive lower bound on the principal. Default 1,000.
    pub principal_floor: Option<Decimal>,
    /// Exclusive upper bound on the principal. Default 1,500,000.
    pub principal_ceiling: Option<Decimal>,
    /// Exclusive lower bound on the annual rate, percent. Default 0.
    pub rate_floor: Option<Decimal>,
    /// Exclusive upper bound on the annual rate, percent. Default 15.
    pub rate_ceiling: Option<Decimal>,
    /// Inclusive minimum term in months. Default 3.
    pub term_min_months: Option<u32>,
    /// Inclusive maximum term in months. Default 60.
    pub term_max_months: Option<u32>,
}

impl std::str::FromStr for DepositConfig {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: DepositConfig =
            serde_json::from_str(s).map_err(|e| DepositError::Configuration {
                reason: format!("failed to parse config JSON: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl DepositConfig {
    pub fn builder() -> DepositConfigBuilder {
        DepositConfigBuilder::default()
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<(), DepositError> {
        if self.get_principal_floor() < Decimal::ZERO {
            return Err(DepositError::Configuration {
                reason: "principal floor must be non-negative".to_string(),
            });
        }
        if self.get_principal_floor() >= self.get_principal_ceiling() {
            return Err(DepositError::Configuration {
                reason: "principal floor must be below the ceiling".to_string(),
            });
        }
        if self.get_rate_floor() < Decimal::ZERO {
            return Err(DepositError::Configuration {
                reason: "rate floor must be non-negative".to_string(),
            });
        }
        if self.get_rate_floor() >= self.get_rate_ceiling() {
            return Err(DepositError::Configuration {
                reason: "rate floor must be below the ceiling".to_string(),
            });
        }
        if self.get_term_min_months() == 0 {
            return Err(DepositError::Configuration {
                reason: "minimum term must be at least 1 month".to_string(),
            });
        }
        if self.get_term_min_months() > self.get_term_max_months() {
            return Err(DepositError::Configuration {
                reason: "minimum term must not exceed the maximum term".to_string(),
            });
        }
        Ok(())
    }

    /// Loads bound overrides from `DEPOSIT_*` environment variables.
    ///
    /// Unset variables keep their defaults. Recognized variables:
    /// `DEPOSIT_PRINCIPAL_FLOOR`, `DEPOSIT_PRINCIPAL_CEILING`,
    /// `DEPOSIT_RATE_FLOOR`, `DEPOSIT_RATE_CEILING`,
    /// `DEPOSIT_TERM_MIN_MONTHS`, `DEPOSIT_TERM_MAX_MONTHS`.
    pub fn from_env() -> Result<Self, DepositError> {
        let mut config = DepositConfig::default();

        config.principal_floor = read_decimal_var("DEPOSIT_PRINCIPAL_FLOOR")?;
        config.principal_ceiling = read_decimal_var("DEPOSIT_PRINCIPAL_CEILING")?;
        config.rate_floor = read_decimal_var("DEPOSIT_RATE_FLOOR")?;
        config.rate_ceiling = read_decimal_var("DEPOSIT_RATE_CEILING")?;
        config.term_min_months = read_months_var("DEPOSIT_TERM_MIN_MONTHS")?;
        config.term_max_months = read_months_var("DEPOSIT_TERM_MAX_MONTHS")?;

        config.validate()?;
        Ok(config)
    }

    /// Attempts to load configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, DepositError> {
        let content = fs::read_to_string(path).map_err(|e| DepositError::Configuration {
            reason: format!("failed to read config file: {}", e),
        })?;
        content.parse()
    }

    // ========== Fluent Helper Methods ==========

    pub fn with_principal_bounds(
        mut self,
        floor: impl IntoDepositDecimal,
        ceiling: impl IntoDepositDecimal,
    ) -> Result<Self, DepositError> {
        self.principal_floor = Some(floor.into_deposit_decimal()?);
        self.principal_ceiling = Some(ceiling.into_deposit_decimal()?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_rate_bounds(
        mut self,
        floor: impl IntoDepositDecimal,
        ceiling: impl IntoDepositDecimal,
    ) -> Result<Self, DepositError> {
        self.rate_floor = Some(floor.into_deposit_decimal()?);
        self.rate_ceiling = Some(ceiling.into_deposit_decimal()?);
        self.validate()?;
        Ok(self)
    }

    pub fn with_term_bounds(mut self, min: u32, max: u32) -> Result<Self, DepositError> {
        self.term_min_months = Some(min);
        self.term_max_months = Some(max);
        self.validate()?;
        Ok(self)
    }

    // Getters

    pub fn get_principal_floor(&self) -> Decimal {
        self.principal_floor.unwrap_or(dec!(1000))
    }

    pub fn get_principal_ceiling(&self) -> Decimal {
        self.principal_ceiling.unwrap_or(dec!(1500000))
    }

    pub fn get_rate_floor(&self) -> Decimal {
        self.rate_floor.unwrap_or(Decimal::ZERO)
    }

    pub fn get_rate_ceiling(&self) -> Decimal {
        self.rate_ceiling.unwrap_or(dec!(15))
    }

    pub fn get_term_min_months(&self) -> u32 {
        self.term_min_months.unwrap_or(3)
    }

    pub fn get_term_max_months(&self) -> u32 {
        self.term_max_months.unwrap_or(60)
    }
}

fn read_decimal_var(name: &str) -> Result<Option<Decimal>, DepositError> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .as_str()
                .into_deposit_decimal()
                .map_err(|e| DepositError::Configuration {
                    reason: format!("invalid {} value: {}", name, e),
                })?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

fn read_months_var(name: &str) -> Result<Option<u32>, DepositError> {
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| DepositError::Configuration {
                    reason: format!("invalid {} value: {}", name, e),
                })?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

// ========== DepositConfigBuilder ==========

#[derive(Default)]
pub struct DepositConfigBuilder {
    principal_floor: Option<Decimal>,
    principal_ceiling: Option<Decimal>,
    rate_floor: Option<Decimal>,
    rate_ceiling: Option<Decimal>,
    term_min_months: Option<u32>,
    term_max_months: Option<u32>,
}

impl DepositConfigBuilder {
    pub fn principal_floor(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.principal_floor = Some(v);
        }
        self
    }

    pub fn principal_ceiling(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.principal_ceiling = Some(v);
        }
        self
    }

    pub fn rate_floor(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.rate_floor = Some(v);
        }
        self
    }

    pub fn rate_ceiling(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.rate_ceiling = Some(v);
        }
        self
    }

    pub fn term_min_months(mut self, months: u32) -> Self {
        self.term_min_months = Some(months);
        self
    }

    pub fn term_max_months(mut self, months: u32) -> Self {
        self.term_max_months = Some(months);
        self
    }
}

impl Validate for DepositConfigBuilder {
    fn validate(&self) -> Result<(), DepositError> {
        let staged = DepositConfig {
            principal_floor: self.principal_floor,
            principal_ceiling: self.principal_ceiling,
            rate_floor: self.rate_floor,
            rate_ceiling: self.rate_ceiling,
            term_min_months: self.term_min_months,
            term_max_months: self.term_max_months,
        };
        staged.validate()
    }
}

impl ProductBuilder<DepositConfig> for DepositConfigBuilder {
    fn build(self) -> Result<DepositConfig, DepositError> {
        self.validate()?;

        Ok(DepositConfig {
            principal_floor: self.principal_floor,
            principal_ceiling: self.principal_ceiling,
            rate_floor: self.rate_floor,
            rate_ceiling: self.rate_ceiling,
            term_min_months: self.term_min_months,
            term_max_months: self.term_max_months,
        })
    }
}
