/// form inputs - parsing the calculator form payload and reporting bad fields
use loan_amortization_rs::{CalculatorError, LoanCalculator, RawLoanInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let calculator = LoanCalculator::default();

    let payloads = [
        r#"{"loanAmount": "250000", "interestRate": "6.5", "loanTerm": "20"}"#,
        r#"{"loanAmount": "50000", "interestRate": "0", "loanTerm": "5"}"#,
        r#"{"loanAmount": "abc", "interestRate": "5", "loanTerm": "10"}"#,
        r#"{"loanAmount": "10000", "interestRate": "4", "loanTerm": "1", "interestOnly": true, "interestOnlyPeriod": "1"}"#,
    ];

    for payload in payloads {
        let raw: RawLoanInputs = serde_json::from_str(payload)?;
        match calculator.calculate_form(&raw) {
            Ok(calculation) => println!(
                "{} over {} months: {} per month",
                calculation.result.principal_paid.format_usd(0),
                calculation.terms.total_months,
                calculation.result.monthly_payment.format_usd(2),
            ),
            Err(err @ CalculatorError::InvalidPeriodSplit { .. }) => {
                println!("rejected interest-only split: {err}")
            }
            Err(err) => match err.field() {
                Some(field) => println!("field {field} rejected: {err}"),
                None => println!("calculation failed: {err}"),
            },
        }
    }

    Ok(())
}
