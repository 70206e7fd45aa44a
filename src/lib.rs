pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod normalize;
pub mod schedule;
pub mod types;

// re-export key types
pub use calculator::{Calculation, LoanCalculator, LoanInputsBuilder};
pub use config::{CalculatorConfig, ExportConfig};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use export::CalculationView;
pub use normalize::NormalizedTerms;
pub use schedule::{AmortizationSchedule, InterestOnlyComparison};
pub use types::{
    AmortizationEntry, AmortizationMethod, CalculationResult, LoanInputs, PaymentPhase, RawLoanInputs,
    YearlySummary,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
