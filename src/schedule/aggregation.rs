use crate::decimal::Money;
use crate::normalize::MONTHS_PER_YEAR;
use crate::types::{AmortizationEntry, YearlySummary};

/// roll a monthly schedule up into consecutive twelve-month blocks
///
/// The last block is shorter when the schedule length is not a multiple of twelve.
pub fn aggregate_by_year(entries: &[AmortizationEntry]) -> Vec<YearlySummary> {
    entries
        .chunks(MONTHS_PER_YEAR as usize)
        .enumerate()
        .map(|(index, block)| YearlySummary {
            year: index as u32 + 1,
            months: block.len() as u32,
            payment: block.iter().map(|e| e.payment).sum(),
            principal: block.iter().map(|e| e.principal).sum(),
            interest: block.iter().map(|e| e.interest).sum(),
            end_balance: block.last().map(|e| e.balance).unwrap_or(Money::ZERO),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentPhase;
    use rust_decimal_macros::dec;

    fn entry(month: u32, balance: i64) -> AmortizationEntry {
        AmortizationEntry {
            month,
            due_date: None,
            phase: PaymentPhase::Amortizing,
            payment: Money::from_major(100),
            principal: Money::from_major(80),
            interest: Money::from_major(20),
            balance: Money::from_major(balance),
        }
    }

    #[test]
    fn test_empty_schedule() {
        assert!(aggregate_by_year(&[]).is_empty());
    }

    #[test]
    fn test_full_and_partial_years() {
        let entries: Vec<_> = (1..=30).map(|m| entry(m, 3_000 - m as i64 * 80)).collect();
        let years = aggregate_by_year(&entries);

        assert_eq!(years.len(), 3);
        assert_eq!(years[0].year, 1);
        assert_eq!(years[0].months, 12);
        assert_eq!(years[0].payment, Money::from_major(1_200));
        assert_eq!(years[0].principal, Money::from_major(960));
        assert_eq!(years[0].interest, Money::from_major(240));
        assert_eq!(years[0].end_balance, entries[11].balance);

        assert_eq!(years[2].year, 3);
        assert_eq!(years[2].months, 6);
        assert_eq!(years[2].payment, Money::from_major(600));
        assert_eq!(years[2].end_balance, entries[29].balance);
    }

    #[test]
    fn test_sums_match_schedule() {
        let entries: Vec<_> = (1..=24)
            .map(|m| AmortizationEntry {
                payment: Money::from_decimal(dec!(100.125)),
                ..entry(m, 0)
            })
            .collect();
        let years = aggregate_by_year(&entries);
        let total: Money = years.iter().map(|y| y.payment).sum();
        assert_eq!(total, Money::from_decimal(dec!(2403.000)));
    }
}
