use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// amortization method selected by the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationMethod {
    /// equal payments from the first month
    Standard,
    /// interest-only phase, then equal payments over the remaining term
    InterestOnly,
}

/// phase a scheduled payment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPhase {
    InterestOnly,
    Amortizing,
}

impl PaymentPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPhase::InterestOnly => "interest_only",
            PaymentPhase::Amortizing => "amortizing",
        }
    }
}

/// calculator form payload, exactly as the fields arrive from the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoanInputs {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_term: String,
    #[serde(default)]
    pub interest_only: bool,
    #[serde(default)]
    pub interest_only_period: Option<String>,
}

impl RawLoanInputs {
    pub fn new(
        loan_amount: impl Into<String>,
        interest_rate: impl Into<String>,
        loan_term: impl Into<String>,
    ) -> Self {
        Self {
            loan_amount: loan_amount.into(),
            interest_rate: interest_rate.into(),
            loan_term: loan_term.into(),
            interest_only: false,
            interest_only_period: None,
        }
    }

    pub fn with_interest_only(mut self, period_years: impl Into<String>) -> Self {
        self.interest_only = true;
        self.interest_only_period = Some(period_years.into());
        self
    }
}

/// typed loan inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputs {
    pub principal: Money,
    /// annual rate as a percentage, 6.5 meaning 6.5%
    pub annual_rate_percent: rust_decimal::Decimal,
    pub term_years: u32,
    pub interest_only: bool,
    /// only meaningful when `interest_only` is set
    pub interest_only_years: u32,
}

impl LoanInputs {
    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage_decimal(self.annual_rate_percent)
    }

    pub fn method(&self) -> AmortizationMethod {
        if self.interest_only && self.interest_only_years > 0 {
            AmortizationMethod::InterestOnly
        } else {
            AmortizationMethod::Standard
        }
    }
}

/// one monthly period of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    pub month: u32,
    pub due_date: Option<NaiveDate>,
    pub phase: PaymentPhase,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// headline figures of a calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// steady-state fully amortizing payment
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub principal_paid: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_only_payment: Option<Money>,
}

/// per-year rollup of up to twelve schedule entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlySummary {
    pub year: u32,
    pub months: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub end_balance: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_inputs_from_form_json() {
        let json = r#"{
            "loanAmount": "250000",
            "interestRate": "6.5",
            "loanTerm": "20",
            "interestOnly": true,
            "interestOnlyPeriod": "2"
        }"#;
        let raw: RawLoanInputs = serde_json::from_str(json).unwrap();
        assert_eq!(raw, RawLoanInputs::new("250000", "6.5", "20").with_interest_only("2"));
    }

    #[test]
    fn test_raw_inputs_optional_fields_default() {
        let json = r#"{"loanAmount": "1000", "interestRate": "5", "loanTerm": "3"}"#;
        let raw: RawLoanInputs = serde_json::from_str(json).unwrap();
        assert!(!raw.interest_only);
        assert!(raw.interest_only_period.is_none());
    }

    #[test]
    fn test_method_selection() {
        let mut inputs = LoanInputs {
            principal: Money::from_major(100_000),
            annual_rate_percent: dec!(5),
            term_years: 10,
            interest_only: false,
            interest_only_years: 2,
        };
        assert_eq!(inputs.method(), AmortizationMethod::Standard);

        inputs.interest_only = true;
        assert_eq!(inputs.method(), AmortizationMethod::InterestOnly);

        inputs.interest_only_years = 0;
        assert_eq!(inputs.method(), AmortizationMethod::Standard);
    }

    #[test]
    fn test_entry_json_matches_result_naming() {
        let entry = AmortizationEntry {
            month: 1,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            phase: PaymentPhase::InterestOnly,
            payment: Money::from_major(120),
            principal: Money::ZERO,
            interest: Money::from_major(120),
            balance: Money::from_major(12_000),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["dueDate"], "2025-01-01");
        assert_eq!(value["phase"], PaymentPhase::InterestOnly.as_str());

        let summary = YearlySummary {
            year: 1,
            months: 12,
            payment: Money::from_major(1_440),
            principal: Money::ZERO,
            interest: Money::from_major(1_440),
            end_balance: Money::from_major(12_000),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["endBalance"], "12000");

        let method = serde_json::to_value(AmortizationMethod::InterestOnly).unwrap();
        assert_eq!(method, "interest_only");
    }

    #[test]
    fn test_result_omits_absent_interest_only_payment() {
        let result = CalculationResult {
            monthly_payment: Money::from_major(10),
            total_payment: Money::from_major(120),
            total_interest: Money::from_major(20),
            principal_paid: Money::from_major(100),
            interest_only_payment: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"monthlyPayment\""));
        assert!(!json.contains("interestOnlyPayment"));
    }
}
