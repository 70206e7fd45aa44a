use serde::{Deserialize, Serialize};

use crate::calculator::{Calculation, LoanCalculator};
use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::normalize::FIELD_INTEREST_ONLY_PERIOD;
use crate::schedule::AmortizationSchedule;
use crate::types::{AmortizationMethod, CalculationResult, LoanInputs};

/// package the headline figures of a generated schedule
pub fn build_result(schedule: &AmortizationSchedule) -> CalculationResult {
    CalculationResult {
        monthly_payment: schedule.amortizing_payment,
        total_payment: schedule.total_payment,
        total_interest: schedule.total_interest,
        principal_paid: schedule.principal,
        interest_only_payment: schedule.interest_only_payment,
    }
}

/// same loan priced with and without its interest-only period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestOnlyComparison {
    pub standard: CalculationResult,
    pub interest_only: CalculationResult,
    /// additional interest paid for deferring principal
    pub extra_interest: Money,
    /// step-up of the amortizing payment over the standard payment
    pub payment_increase: Money,
}

/// price an interest-only loan against the equivalent standard loan
pub fn compare_interest_only(calculator: &LoanCalculator, inputs: &LoanInputs) -> Result<InterestOnlyComparison> {
    if inputs.method() != AmortizationMethod::InterestOnly {
        return Err(CalculatorError::invalid_input(
            FIELD_INTEREST_ONLY_PERIOD,
            inputs.interest_only_years.to_string(),
            "comparison requires an interest-only period",
        ));
    }

    let standard_inputs = LoanInputs {
        interest_only: false,
        interest_only_years: 0,
        ..inputs.clone()
    };

    let Calculation { result: interest_only, .. } = calculator.calculate(inputs)?;
    let Calculation { result: standard, .. } = calculator.calculate(&standard_inputs)?;

    Ok(InterestOnlyComparison {
        extra_interest: interest_only.total_interest - standard.total_interest,
        payment_increase: interest_only.monthly_payment - standard.monthly_payment,
        standard,
        interest_only,
    })
}
