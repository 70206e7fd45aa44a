use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::normalize::{NormalizedTerms, FIELD_LOAN_TERM, MAX_SCHEDULE_MONTHS};
use crate::schedule::AmortizationSchedule;
use crate::types::{AmortizationEntry, AmortizationMethod, PaymentPhase};

/// schedule generator for standard and interest-only loans
#[derive(Debug, Clone)]
pub struct AmortizationCalculator {
    first_payment_date: Option<NaiveDate>,
    balance_tolerance: Money,
}

impl AmortizationCalculator {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            first_payment_date: config.first_payment_date,
            balance_tolerance: config.balance_tolerance,
        }
    }

    /// calculate full amortization schedule
    pub fn calculate_schedule(&self, terms: &NormalizedTerms) -> Result<AmortizationSchedule> {
        if terms.total_months == 0 {
            return Err(CalculatorError::CalculationError {
                message: "cannot schedule a loan with no periods".to_string(),
            });
        }

        if terms.total_months > MAX_SCHEDULE_MONTHS {
            return Err(CalculatorError::invalid_input(
                FIELD_LOAN_TERM,
                terms.total_months.to_string(),
                format!("schedule is limited to {MAX_SCHEDULE_MONTHS} months"),
            ));
        }

        let method = terms.method();
        if method == AmortizationMethod::InterestOnly && terms.interest_only_months >= terms.total_months {
            return Err(CalculatorError::InvalidPeriodSplit {
                interest_only_months: terms.interest_only_months,
                total_months: terms.total_months,
            });
        }

        debug!(
            ?method,
            principal = %terms.principal,
            monthly_rate = %terms.monthly_rate,
            total_months = terms.total_months,
            interest_only_months = terms.interest_only_months,
            "generating amortization schedule"
        );

        match method {
            AmortizationMethod::Standard => self.calculate_standard(terms),
            AmortizationMethod::InterestOnly => self.calculate_interest_only(terms),
        }
    }

    /// equal payments over the whole term
    fn calculate_standard(&self, terms: &NormalizedTerms) -> Result<AmortizationSchedule> {
        let payment = monthly_payment(terms.principal, terms.monthly_rate, terms.total_months)?;

        let mut entries = Vec::with_capacity(terms.total_months as usize);
        self.amortize(&mut entries, terms, 1, terms.total_months, payment);

        AmortizationSchedule::new(terms, payment, None, entries)
    }

    /// interest-only phase followed by equal payments over the remaining months
    fn calculate_interest_only(&self, terms: &NormalizedTerms) -> Result<AmortizationSchedule> {
        let remaining_months = terms.amortizing_months();
        // the balance is untouched by the interest-only phase, so the full
        // principal is amortized over the shorter remainder
        let payment = monthly_payment(terms.principal, terms.monthly_rate, remaining_months)?;
        let interest_only_payment = terms
            .principal
            .checked_interest_at(terms.monthly_rate)
            .ok_or_else(|| CalculatorError::overflow("interest-only payment"))?;

        let mut entries = Vec::with_capacity(terms.total_months as usize);
        for month in 1..=terms.interest_only_months {
            entries.push(AmortizationEntry {
                month,
                due_date: self.due_date(month),
                phase: PaymentPhase::InterestOnly,
                payment: interest_only_payment,
                principal: Money::ZERO,
                interest: interest_only_payment,
                balance: terms.principal,
            });
        }

        self.amortize(&mut entries, terms, terms.interest_only_months + 1, remaining_months, payment);

        AmortizationSchedule::new(terms, payment, Some(interest_only_payment), entries)
    }

    /// append `months` amortizing entries starting at `first_month`
    fn amortize(
        &self,
        entries: &mut Vec<AmortizationEntry>,
        terms: &NormalizedTerms,
        first_month: u32,
        months: u32,
        payment: Money,
    ) {
        let mut balance = terms.principal;

        for month in first_month..first_month + months {
            let interest = balance.interest_at(terms.monthly_rate);
            let principal_portion = payment - interest;
            balance -= principal_portion;

            let recorded_balance = if month == terms.total_months {
                self.clamp_final_balance(balance)
            } else {
                balance.max(Money::ZERO)
            };

            entries.push(AmortizationEntry {
                month,
                due_date: self.due_date(month),
                phase: PaymentPhase::Amortizing,
                payment,
                principal: principal_portion,
                interest,
                balance: recorded_balance,
            });
        }
    }

    fn clamp_final_balance(&self, residual: Money) -> Money {
        if residual.abs() > self.balance_tolerance {
            warn!(
                %residual,
                tolerance = %self.balance_tolerance,
                "final balance residual exceeds tolerance, clamping to zero"
            );
        }
        Money::ZERO
    }

    fn due_date(&self, month: u32) -> Option<NaiveDate> {
        self.first_payment_date
            .and_then(|first| first.checked_add_months(Months::new(month - 1)))
    }
}

/// fixed payment that amortizes `principal` over `months` periods
///
/// Uses the annuity formula `P * r * (1 + r)^n / ((1 + r)^n - 1)`. A zero rate
/// repays in equal principal instalments, as does a non-zero rate too small
/// for the annuity factor to register at decimal precision.
///
/// # Errors
///
/// `DegenerateRate` when `1 + r` is not positive, `CalculationError` when
/// `months` is zero or the compounding overflows the decimal range.
pub fn monthly_payment(principal: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(CalculatorError::CalculationError {
            message: "cannot amortize over zero months".to_string(),
        });
    }

    let periods = Decimal::from(months);
    if monthly_rate.is_zero() {
        debug!(months, "zero rate, repaying principal in equal instalments");
        return Ok(principal / periods);
    }

    let r = monthly_rate.as_decimal();
    if Decimal::ONE + r <= Decimal::ZERO {
        return Err(CalculatorError::DegenerateRate { monthly_rate });
    }

    let compound = monthly_rate
        .compound_factor(months)
        .ok_or_else(|| CalculatorError::overflow("compounding factor"))?;
    let annuity = compound - Decimal::ONE;
    if annuity.is_zero() {
        debug!(%monthly_rate, months, "annuity factor vanished at decimal precision, repaying in equal instalments");
        return Ok(principal / periods);
    }

    principal
        .checked_mul(r)
        .and_then(|m| m.checked_mul(compound))
        .and_then(|m| m.checked_div(annuity))
        .ok_or_else(|| CalculatorError::overflow("monthly payment"))
}
