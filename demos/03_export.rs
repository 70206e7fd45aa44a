/// export - csv schedule and json view of a dated interest-only loan
use chrono::NaiveDate;
use loan_amortization_rs::export::{write_schedule_csv, write_yearly_csv};
use loan_amortization_rs::{CalculationView, CalculatorConfig, LoanCalculator, RawLoanInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let config = CalculatorConfig::from_json(r#"{"export": {"decimal_places": 2}}"#)?
        .with_first_payment_date(NaiveDate::from_ymd_opt(2025, 1, 1).ok_or("invalid date")?);
    let calculator = LoanCalculator::new(config);

    let calculation =
        calculator.calculate_form(&RawLoanInputs::new("400000", "7.25", "30").with_interest_only("5"))?;

    println!("=== yearly ===");
    write_yearly_csv(&calculation, &calculator.config().export, std::io::stdout())?;

    println!("\n=== first 3 months ===");
    let mut monthly = Vec::new();
    write_schedule_csv(&calculation, &calculator.config().export, &mut monthly)?;
    for line in String::from_utf8(monthly)?.lines().take(4) {
        println!("{line}");
    }

    println!("\n=== json result ===");
    let view = CalculationView::from_calculation(&calculation);
    let json: serde_json::Value = serde_json::from_str(&view.to_json_pretty()?)?;
    println!("{}", serde_json::to_string_pretty(&json["result"])?);

    Ok(())
}
