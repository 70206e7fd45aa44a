/// quick start - a standard fully amortizing mortgage
use loan_amortization_rs::{LoanCalculator, LoanInputs, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let inputs = LoanInputs::builder()
        .principal(Money::from_major(250_000))
        .annual_rate_percent(dec!(6.5))
        .term_years(20)
        .build()?;

    let calculation = LoanCalculator::default().calculate(&inputs)?;
    let result = &calculation.result;

    println!("monthly payment: {}", result.monthly_payment.format_usd(2));
    println!("total payment:   {}", result.total_payment.format_usd(2));
    println!("total interest:  {}", result.total_interest.format_usd(2));

    println!("\nyear  payment      principal    interest     balance");
    for year in calculation.yearly_summaries() {
        println!(
            "{:>4}  {:>11}  {:>11}  {:>11}  {:>11}",
            year.year,
            year.payment.format_usd(0),
            year.principal.format_usd(0),
            year.interest.format_usd(0),
            year.end_balance.format_usd(0),
        );
    }

    Ok(())
}
