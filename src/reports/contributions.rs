//! Contribution totals grouped by calendar month.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyContribution {
    /// "YYYY-MM" key; lexicographic order equals chronological order.
    pub month: String,
    pub total: Decimal,
}

/// Sum contribution amounts per calendar month, ascending by month.
/// Non-contribution transaction kinds are excluded entirely.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthlyContribution> {
    let mut months: BTreeMap<String, Decimal> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_contribution()) {
        let key = tx.date.format("%Y-%m").to_string();
        *months.entry(key).or_insert(Decimal::ZERO) += tx.amount;
    }

    months
        .into_iter()
        .map(|(month, total)| MonthlyContribution { month, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(kind: &str, investor: &str, date: &str, amount: Decimal) -> Transaction {
        Transaction {
            kind: kind.to_string(),
            investor_id: investor.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            currency: "EUR".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_group_by_month_excludes_other_kinds() {
        let transactions = vec![
            tx("contribution", "A", "2024-01-15", dec!(100)),
            tx("contribution", "B", "2024-01-20", dec!(50)),
            tx("withdrawal", "A", "2024-01-22", dec!(30)),
        ];

        let grouped = group_by_month(&transactions);
        assert_eq!(
            grouped,
            vec![MonthlyContribution {
                month: "2024-01".to_string(),
                total: dec!(150),
            }]
        );
    }

    #[test]
    fn test_group_by_month_sorted_ascending() {
        let transactions = vec![
            tx("contribution", "A", "2024-03-01", dec!(3)),
            tx("contribution", "A", "2023-12-31", dec!(1)),
            tx("contribution", "A", "2024-01-05", dec!(2)),
            tx("contribution", "A", "2024-01-25", dec!(4)),
        ];

        let grouped = group_by_month(&transactions);
        let months: Vec<&str> = grouped.iter().map(|g| g.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(grouped[1].total, dec!(6));
    }

    #[test]
    fn test_group_by_month_empty_input() {
        assert!(group_by_month(&[]).is_empty());
    }
}
