pub mod aggregation;
pub mod amortization;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::normalize::NormalizedTerms;
use crate::types::{AmortizationEntry, AmortizationMethod, PaymentPhase, YearlySummary};

pub use aggregation::aggregate_by_year;
pub use amortization::{monthly_payment, AmortizationCalculator};
pub use summary::{build_result, compare_interest_only, InterestOnlyComparison};

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub method: AmortizationMethod,
    pub principal: Money,
    pub monthly_rate: Rate,
    pub total_months: u32,
    pub interest_only_months: u32,
    /// fully amortizing payment, after any interest-only phase
    pub amortizing_payment: Money,
    pub interest_only_payment: Option<Money>,
    pub entries: Vec<AmortizationEntry>,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl AmortizationSchedule {
    pub(crate) fn new(
        terms: &NormalizedTerms,
        amortizing_payment: Money,
        interest_only_payment: Option<Money>,
        entries: Vec<AmortizationEntry>,
    ) -> Result<Self> {
        let total_payment = entries
            .iter()
            .try_fold(Money::ZERO, |acc, e| acc.checked_add(e.payment))
            .ok_or_else(|| CalculatorError::overflow("total payment"))?;

        Ok(Self {
            method: terms.method(),
            principal: terms.principal,
            monthly_rate: terms.monthly_rate,
            total_months: terms.total_months,
            interest_only_months: terms.interest_only_months,
            amortizing_payment,
            interest_only_payment,
            entries,
            total_payment,
            total_interest: total_payment - terms.principal,
        })
    }

    /// get payment for specific month (1-based)
    pub fn get_payment(&self, month: u32) -> Option<&AmortizationEntry> {
        if month == 0 {
            return None;
        }
        self.entries.get((month - 1) as usize)
    }

    /// remaining balance after the given month; month 0 is the original principal
    pub fn balance_after_payment(&self, month: u32) -> Money {
        if month == 0 {
            return self.principal;
        }
        self.get_payment(month)
            .or_else(|| self.entries.last())
            .map(|e| e.balance)
            .unwrap_or(self.principal)
    }

    pub fn interest_only_phase(&self) -> &[AmortizationEntry] {
        let split = self.phase_split();
        &self.entries[..split]
    }

    pub fn amortizing_phase(&self) -> &[AmortizationEntry] {
        let split = self.phase_split();
        &self.entries[split..]
    }

    /// interest paid through the given month, inclusive
    pub fn cumulative_interest(&self, month: u32) -> Money {
        self.through(month).iter().map(|e| e.interest).sum()
    }

    /// principal repaid through the given month, inclusive
    pub fn cumulative_principal(&self, month: u32) -> Money {
        self.through(month).iter().map(|e| e.principal).sum()
    }

    pub fn yearly_summaries(&self) -> Vec<YearlySummary> {
        aggregate_by_year(&self.entries)
    }

    fn through(&self, month: u32) -> &[AmortizationEntry] {
        let end = (month as usize).min(self.entries.len());
        &self.entries[..end]
    }

    fn phase_split(&self) -> usize {
        self.entries
            .iter()
            .take_while(|e| e.phase == PaymentPhase::InterestOnly)
            .count()
    }
}
