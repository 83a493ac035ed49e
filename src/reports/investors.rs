//! Per-investor lifetime contribution totals and fund shares.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::dataset::{Investor, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub struct InvestorTotals {
    /// Lifetime contribution total per investor id. Every listed investor
    /// appears, including those with zero contributions. Transactions
    /// referencing an unknown investor id still accumulate here; the map
    /// grows dynamically rather than erroring.
    pub per_investor: HashMap<String, Decimal>,
    pub total_fund: Decimal,
}

/// Accumulate contribution amounts per investor and the fund-wide total.
pub fn totals(investors: &[Investor], transactions: &[Transaction]) -> InvestorTotals {
    let mut per_investor: HashMap<String, Decimal> = investors
        .iter()
        .map(|inv| (inv.id.clone(), Decimal::ZERO))
        .collect();

    for tx in transactions.iter().filter(|t| t.is_contribution()) {
        *per_investor
            .entry(tx.investor_id.clone())
            .or_insert(Decimal::ZERO) += tx.amount;
    }

    let total_fund = per_investor.values().fold(Decimal::ZERO, |acc, v| acc + *v);

    InvestorTotals {
        per_investor,
        total_fund,
    }
}

/// One row of the investor listing: lifetime total and share of the fund.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorShare {
    pub id: String,
    pub name: String,
    pub total: Decimal,
    pub share: Decimal,
}

/// Listed investors sorted by lifetime total, largest first, each with its
/// share of total fund contributions (zero when the fund total is zero).
pub fn ranked(totals: &InvestorTotals, investors: &[Investor]) -> Vec<InvestorShare> {
    let mut rows: Vec<InvestorShare> = investors
        .iter()
        .map(|inv| {
            let total = totals
                .per_investor
                .get(&inv.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let share = if totals.total_fund.is_zero() {
                Decimal::ZERO
            } else {
                total / totals.total_fund
            };
            InvestorShare {
                id: inv.id.clone(),
                name: inv.name.clone(),
                total,
                share,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}
