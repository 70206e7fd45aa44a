use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid input for {field}: {value:?} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("degenerate rate: monthly rate {monthly_rate} leaves no positive growth factor")]
    DegenerateRate {
        monthly_rate: Rate,
    },

    #[error("invalid period split: {interest_only_months} interest-only months leave no amortizing period within {total_months} months")]
    InvalidPeriodSplit {
        interest_only_months: u32,
        total_months: u32,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("export error: {message}")]
    Export {
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn invalid_input(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidInput {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(what: &str) -> Self {
        CalculatorError::CalculationError {
            message: format!("{what} exceeds the decimal range"),
        }
    }

    /// name of the offending form field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculatorError::InvalidInput { field, .. } => Some(*field),
            CalculatorError::InvalidPeriodSplit { .. } => Some("interestOnlyPeriod"),
            _ => None,
        }
    }
}

impl From<csv::Error> for CalculatorError {
    fn from(err: csv::Error) -> Self {
        CalculatorError::Export { message: err.to_string() }
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        CalculatorError::Export { message: err.to_string() }
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(err: std::io::Error) -> Self {
        CalculatorError::Export { message: err.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
