use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::normalize::{self, NormalizedTerms, FIELD_INTEREST_RATE, FIELD_LOAN_AMOUNT, FIELD_LOAN_TERM};
use crate::schedule::{self, AmortizationCalculator, AmortizationSchedule};
use crate::types::{AmortizationEntry, CalculationResult, LoanInputs, RawLoanInputs, YearlySummary};

/// loan calculator
#[derive(Debug, Clone, Default)]
pub struct LoanCalculator {
    config: CalculatorConfig,
}

/// outcome of one calculation: headline figures plus the full schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub inputs: LoanInputs,
    pub terms: NormalizedTerms,
    pub result: CalculationResult,
    pub schedule: AmortizationSchedule,
}

impl Calculation {
    pub fn entries(&self) -> &[AmortizationEntry] {
        &self.schedule.entries
    }

    pub fn yearly_summaries(&self) -> Vec<YearlySummary> {
        self.schedule.yearly_summaries()
    }
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// calculate from the raw calculator form
    pub fn calculate_form(&self, raw: &RawLoanInputs) -> Result<Calculation> {
        let inputs = normalize::parse_inputs(raw)?;
        self.calculate(&inputs)
    }

    /// calculate from typed inputs
    pub fn calculate(&self, inputs: &LoanInputs) -> Result<Calculation> {
        let terms = normalize::normalize(inputs)?;
        let schedule = AmortizationCalculator::new(&self.config).calculate_schedule(&terms)?;
        let result = schedule::build_result(&schedule);

        debug!(
            monthly_payment = %result.monthly_payment,
            total_payment = %result.total_payment,
            total_interest = %result.total_interest,
            "loan calculated"
        );

        Ok(Calculation {
            inputs: inputs.clone(),
            terms,
            result,
            schedule,
        })
    }
}

impl LoanInputs {
    pub fn builder() -> LoanInputsBuilder {
        LoanInputsBuilder::new()
    }
}

/// builder for typed loan inputs
#[derive(Debug, Clone, Default)]
pub struct LoanInputsBuilder {
    principal: Option<Money>,
    annual_rate_percent: Option<Decimal>,
    term_years: Option<u32>,
    interest_only_years: Option<u32>,
}

impl LoanInputsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    /// annual rate in percent, e.g. `dec!(6.5)`
    pub fn annual_rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate_percent = Some(percent);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    /// enable an interest-only period of the given length
    pub fn interest_only_years(mut self, years: u32) -> Self {
        self.interest_only_years = Some(years);
        self
    }

    pub fn build(self) -> Result<LoanInputs> {
        let principal = self.principal.ok_or_else(|| missing(FIELD_LOAN_AMOUNT))?;
        let annual_rate_percent = self.annual_rate_percent.ok_or_else(|| missing(FIELD_INTEREST_RATE))?;
        let term_years = self.term_years.ok_or_else(|| missing(FIELD_LOAN_TERM))?;

        Ok(LoanInputs {
            principal,
            annual_rate_percent,
            term_years,
            interest_only: self.interest_only_years.is_some(),
            interest_only_years: self.interest_only_years.unwrap_or(0),
        })
    }
}

fn missing(field: &'static str) -> CalculatorError {
    CalculatorError::invalid_input(field, "", "value is required")
}
