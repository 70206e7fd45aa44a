use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// due date of month 1; later months follow on the same day of month
    pub first_payment_date: Option<NaiveDate>,
    /// final-period residual above which the balance clamp is reported
    pub balance_tolerance: Money,
    pub export: ExportConfig,
}

/// export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub decimal_places: u32,
    pub include_header: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            first_payment_date: None,
            balance_tolerance: Money::CENT,
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            include_header: true,
        }
    }
}

impl CalculatorConfig {
    /// load configuration from a json document, missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_first_payment_date(mut self, date: NaiveDate) -> Self {
        self.first_payment_date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.balance_tolerance.is_negative() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("balance_tolerance must not be negative, got {}", self.balance_tolerance),
            });
        }
        // rust_decimal supports at most 28 fractional digits
        if self.export.decimal_places > 28 {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("export.decimal_places must be at most 28, got {}", self.export.decimal_places),
            });
        }
        Ok(())
    }
}
