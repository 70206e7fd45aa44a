//! Conversion of calculator inputs into the periodic terms the schedule
//! generators work with.
//!
//! Free-text form values are parsed here and nowhere else. Principal and rate
//! are only checked for parseability; the term is capped at
//! `MAX_SCHEDULE_MONTHS` so a schedule always fits in memory.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::{AmortizationMethod, LoanInputs, RawLoanInputs};

pub const MONTHS_PER_YEAR: u32 = 12;
/// longest schedule the calculator will generate, one row per month
pub const MAX_SCHEDULE_MONTHS: u32 = 12_000;

pub const FIELD_LOAN_AMOUNT: &str = "loanAmount";
pub const FIELD_INTEREST_RATE: &str = "interestRate";
pub const FIELD_LOAN_TERM: &str = "loanTerm";
pub const FIELD_INTEREST_ONLY_PERIOD: &str = "interestOnlyPeriod";

/// monthly terms derived from loan inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTerms {
    pub principal: Money,
    pub monthly_rate: Rate,
    pub total_months: u32,
    /// zero when interest-only is disabled
    pub interest_only_months: u32,
}

impl NormalizedTerms {
    pub fn method(&self) -> AmortizationMethod {
        if self.interest_only_months > 0 {
            AmortizationMethod::InterestOnly
        } else {
            AmortizationMethod::Standard
        }
    }

    pub fn amortizing_months(&self) -> u32 {
        self.total_months.saturating_sub(self.interest_only_months)
    }
}

/// parse the raw form payload into typed inputs
pub fn parse_inputs(raw: &RawLoanInputs) -> Result<LoanInputs> {
    let principal = parse_decimal(FIELD_LOAN_AMOUNT, &raw.loan_amount)?;
    let annual_rate_percent = parse_decimal(FIELD_INTEREST_RATE, &raw.interest_rate)?;
    let term_years = parse_whole(FIELD_LOAN_TERM, &raw.loan_term)?;

    let interest_only_years = if raw.interest_only {
        match raw.interest_only_period.as_deref() {
            Some(period) => parse_whole(FIELD_INTEREST_ONLY_PERIOD, period)?,
            None => {
                return Err(reject(FIELD_INTEREST_ONLY_PERIOD, "", "required when interest-only is enabled"));
            }
        }
    } else {
        0
    };

    Ok(LoanInputs {
        principal: Money::from_decimal(principal),
        annual_rate_percent,
        term_years,
        interest_only: raw.interest_only,
        interest_only_years,
    })
}

/// convert typed inputs into monthly rate and period counts
pub fn normalize(inputs: &LoanInputs) -> Result<NormalizedTerms> {
    if inputs.term_years == 0 {
        return Err(reject(FIELD_LOAN_TERM, "0", "term must be at least one year"));
    }

    let total_months = years_to_months(FIELD_LOAN_TERM, inputs.term_years)?;
    if total_months > MAX_SCHEDULE_MONTHS {
        return Err(reject(
            FIELD_LOAN_TERM,
            inputs.term_years.to_string(),
            format!("term exceeds {MAX_SCHEDULE_MONTHS} months"),
        ));
    }
    let interest_only_months = if inputs.interest_only {
        years_to_months(FIELD_INTEREST_ONLY_PERIOD, inputs.interest_only_years)?
    } else {
        0
    };

    Ok(NormalizedTerms {
        principal: inputs.principal,
        monthly_rate: inputs.annual_rate().monthly_rate(),
        total_months,
        interest_only_months,
    })
}

fn years_to_months(field: &'static str, years: u32) -> Result<u32> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| reject(field, years.to_string(), "too many months to schedule"))
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(reject(field, value, "value is required"));
    }

    // scientific notation is accepted as a fallback for exported spreadsheet values
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| reject(field, value, format!("not a finite number: {e}")))
}

fn parse_whole(field: &'static str, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(reject(field, value, "value is required"));
    }

    u32::from_str(trimmed).map_err(|e| reject(field, value, format!("not a whole number of years: {e}")))
}

fn reject(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> CalculatorError {
    let err = CalculatorError::invalid_input(field, value, reason);
    warn!(field, error = %err, "rejected loan input");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(amount: &str, rate: &str, term: &str) -> RawLoanInputs {
        RawLoanInputs::new(amount, rate, term)
    }

    #[test]
    fn test_parse_standard_inputs() {
        let inputs = parse_inputs(&raw(" 250000 ", "6.5", "20")).unwrap();
        assert_eq!(inputs.principal, Money::from_major(250_000));
        assert_eq!(inputs.annual_rate_percent, dec!(6.5));
        assert_eq!(inputs.term_years, 20);
        assert!(!inputs.interest_only);
        assert_eq!(inputs.interest_only_years, 0);
    }

    #[test]
    fn test_parse_ignores_period_when_interest_only_disabled() {
        let mut form = raw("100000", "5", "10");
        form.interest_only_period = Some("garbage".to_string());
        let inputs = parse_inputs(&form).unwrap();
        assert_eq!(inputs.interest_only_years, 0);
    }

    #[test]
    fn test_parse_interest_only_inputs() {
        let inputs = parse_inputs(&raw("100000", "5", "10").with_interest_only("2")).unwrap();
        assert!(inputs.interest_only);
        assert_eq!(inputs.interest_only_years, 2);
    }

    #[test]
    fn test_non_numeric_principal_is_invalid_input() {
        let err = parse_inputs(&raw("abc", "5", "10")).unwrap_err();
        match err {
            CalculatorError::InvalidInput { field, value, .. } => {
                assert_eq!(field, FIELD_LOAN_AMOUNT);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_rate_and_term_are_invalid_input() {
        let err = parse_inputs(&raw("1000", "six", "10")).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_INTEREST_RATE));

        let err = parse_inputs(&raw("1000", "6", "ten")).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));

        let err = parse_inputs(&raw("1000", "6", "10.5")).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));
    }

    #[test]
    fn test_non_finite_values_are_invalid_input() {
        for value in ["NaN", "inf", "Infinity", ""] {
            let err = parse_inputs(&raw(value, "5", "10")).unwrap_err();
            assert_eq!(err.field(), Some(FIELD_LOAN_AMOUNT), "value {value:?}");
        }
    }

    #[test]
    fn test_scientific_notation_accepted() {
        let inputs = parse_inputs(&raw("2.5e5", "6.5", "20")).unwrap();
        assert_eq!(inputs.principal, Money::from_major(250_000));
    }

    #[test]
    fn test_missing_interest_only_period() {
        let mut form = raw("100000", "5", "10");
        form.interest_only = true;
        let err = parse_inputs(&form).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_INTEREST_ONLY_PERIOD));

        let err = parse_inputs(&raw("100000", "5", "10").with_interest_only("  ")).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_INTEREST_ONLY_PERIOD));
    }

    #[test]
    fn test_normalize_standard() {
        let inputs = parse_inputs(&raw("250000", "6", "20")).unwrap();
        let terms = normalize(&inputs).unwrap();
        assert_eq!(terms.monthly_rate.as_decimal(), dec!(0.005));
        assert_eq!(terms.total_months, 240);
        assert_eq!(terms.interest_only_months, 0);
        assert_eq!(terms.method(), AmortizationMethod::Standard);
    }

    #[test]
    fn test_normalize_interest_only() {
        let inputs = parse_inputs(&raw("100000", "5", "10").with_interest_only("2")).unwrap();
        let terms = normalize(&inputs).unwrap();
        assert_eq!(terms.total_months, 120);
        assert_eq!(terms.interest_only_months, 24);
        assert_eq!(terms.amortizing_months(), 96);
        assert_eq!(terms.method(), AmortizationMethod::InterestOnly);
    }

    #[test]
    fn test_normalize_rejects_zero_term() {
        let inputs = parse_inputs(&raw("1000", "5", "0")).unwrap();
        let err = normalize(&inputs).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));
    }

    #[test]
    fn test_normalize_rejects_term_beyond_schedule_limit() {
        let inputs = parse_inputs(&raw("1000", "0", "357913941")).unwrap();
        let err = normalize(&inputs).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));

        let longest = (MAX_SCHEDULE_MONTHS / MONTHS_PER_YEAR).to_string();
        let terms = normalize(&parse_inputs(&raw("1000", "0", &longest)).unwrap()).unwrap();
        assert_eq!(terms.total_months, MAX_SCHEDULE_MONTHS);

        let too_long = (MAX_SCHEDULE_MONTHS / MONTHS_PER_YEAR + 1).to_string();
        let err = normalize(&parse_inputs(&raw("1000", "0", &too_long)).unwrap()).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));
    }

    #[test]
    fn test_long_interest_only_period_is_a_period_split() {
        let inputs = parse_inputs(&raw("1000", "5", "10").with_interest_only("5000")).unwrap();
        let terms = normalize(&inputs).unwrap();
        assert_eq!(terms.interest_only_months, 60_000);
    }

    #[test]
    fn test_normalize_rejects_month_overflow() {
        let inputs = parse_inputs(&raw("1000", "5", "4294967295")).unwrap();
        let err = normalize(&inputs).unwrap_err();
        assert_eq!(err.field(), Some(FIELD_LOAN_TERM));
    }
}
