//! CSV and JSON renderings of a calculation for download and API responses.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::calculator::Calculation;
use crate::config::ExportConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{AmortizationEntry, CalculationResult, LoanInputs, YearlySummary};

const SCHEDULE_HEADER: [&str; 7] = ["month", "due_date", "phase", "payment", "principal", "interest", "balance"];
const YEARLY_HEADER: [&str; 5] = ["year", "payment", "principal", "interest", "end_balance"];

/// write the monthly schedule as csv
pub fn write_schedule_csv<W: Write>(calculation: &Calculation, config: &ExportConfig, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if config.include_header {
        wtr.write_record(SCHEDULE_HEADER)?;
    }

    let dp = config.decimal_places;
    for entry in calculation.entries() {
        wtr.write_record([
            entry.month.to_string(),
            entry.due_date.map(|d| d.to_string()).unwrap_or_default(),
            entry.phase.as_str().to_string(),
            amount(entry.payment, dp),
            amount(entry.principal, dp),
            amount(entry.interest, dp),
            amount(entry.balance, dp),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// write the yearly rollup as csv
pub fn write_yearly_csv<W: Write>(calculation: &Calculation, config: &ExportConfig, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if config.include_header {
        wtr.write_record(YEARLY_HEADER)?;
    }

    let dp = config.decimal_places;
    for year in calculation.yearly_summaries() {
        wtr.write_record([
            year.year.to_string(),
            amount(year.payment, dp),
            amount(year.principal, dp),
            amount(year.interest, dp),
            amount(year.end_balance, dp),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn amount(value: Money, dp: u32) -> String {
    format!("{:.*}", dp as usize, value.round_dp(dp).as_decimal())
}

/// serializable view of a calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationView {
    pub inputs: LoanInputs,
    pub result: CalculationResult,
    pub yearly: Vec<YearlySummary>,
    pub schedule: Vec<AmortizationEntry>,
}

impl CalculationView {
    pub fn from_calculation(calculation: &Calculation) -> Self {
        CalculationView {
            inputs: calculation.inputs.clone(),
            result: calculation.result.clone(),
            yearly: calculation.yearly_summaries(),
            schedule: calculation.entries().to_vec(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
