/// interest-only period followed by full amortization, compared to a standard loan
use loan_amortization_rs::schedule::compare_interest_only;
use loan_amortization_rs::{LoanCalculator, LoanInputs, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let inputs = LoanInputs::builder()
        .principal(Money::from_major(100_000))
        .annual_rate_percent(dec!(5))
        .term_years(10)
        .interest_only_years(2)
        .build()?;

    let calculator = LoanCalculator::default();
    let calculation = calculator.calculate(&inputs)?;
    let schedule = &calculation.schedule;

    if let Some(io_payment) = calculation.result.interest_only_payment {
        println!(
            "interest-only payment: {} for {} months",
            io_payment.format_usd(2),
            schedule.interest_only_phase().len()
        );
    }
    println!(
        "amortizing payment:    {} for {} months",
        calculation.result.monthly_payment.format_usd(2),
        schedule.amortizing_phase().len()
    );
    println!(
        "balance after month 24: {}",
        schedule.balance_after_payment(24).format_usd(2)
    );

    let comparison = compare_interest_only(&calculator, &inputs)?;
    println!("\ncompared to amortizing from month 1:");
    println!("  standard payment: {}", comparison.standard.monthly_payment.format_usd(2));
    println!("  payment increase: {}", comparison.payment_increase.format_usd(2));
    println!("  extra interest:   {}", comparison.extra_interest.format_usd(2));

    Ok(())
}
