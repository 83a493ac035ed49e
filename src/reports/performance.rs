//! Performance derivation over the market snapshot series
//!
//! A single left-to-right pass enriches each snapshot with the running sum
//! of realized gains and the derived performance figures. The pass is pure:
//! no hidden state survives between calls, and the output has the same
//! length and order as the input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::dataset::{MarketSnapshot, SnapshotGranularity};

/// A market snapshot enriched with derived performance figures.
///
/// `perf_eur` is H = G - A (unrealized gain) and `perf_pct` is I = H / A,
/// the percentage return on contributed capital.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSnapshot {
    #[serde(flatten)]
    pub snapshot: MarketSnapshot,
    pub realized_cum_net: Decimal,
    pub realized_pct: Decimal,
    pub invested_cum: Decimal,
    pub perf_eur: Decimal,
    pub perf_pct: Decimal,
}

/// A zero contribution base always yields a zero ratio, never an error or
/// a non-finite value.
fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Derive the enriched snapshot sequence from an ordered snapshot series.
pub fn derive(snapshots: &[MarketSnapshot]) -> Vec<DerivedSnapshot> {
    let mut realized = Decimal::ZERO;
    let mut out = Vec::with_capacity(snapshots.len());

    for snapshot in snapshots {
        realized += snapshot.dividends_net + snapshot.cap_gains_net;
        let contrib = snapshot.contrib_cum;
        let perf_eur = snapshot.market_value_gross - contrib;

        out.push(DerivedSnapshot {
            realized_cum_net: realized,
            realized_pct: ratio_or_zero(realized, contrib),
            invested_cum: contrib + realized,
            perf_eur,
            perf_pct: ratio_or_zero(perf_eur, contrib),
            snapshot: snapshot.clone(),
        });
    }

    out
}

/// Monthly rows only, with yearly summary rows filtered out. This is the
/// series behind the value/performance views and the snapshot table.
pub fn monthly_rows(derived: &[DerivedSnapshot]) -> Vec<DerivedSnapshot> {
    derived
        .iter()
        .filter(|row| row.snapshot.granularity == SnapshotGranularity::Monthly)
        .cloned()
        .collect()
}

/// Headline fund KPIs: the latest derived row plus whole-series totals of
/// net dividends and net capital gains (the realized-gain breakdown).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundSummary {
    pub date: NaiveDate,
    pub market_value_gross: Decimal,
    pub contrib_cum: Decimal,
    pub perf_eur: Decimal,
    pub perf_pct: Decimal,
    pub realized_cum_net: Decimal,
    pub total_dividends_net: Decimal,
    pub total_cap_gains_net: Decimal,
}

/// Summarize the derived series; `None` when there are no snapshots.
pub fn fund_summary(derived: &[DerivedSnapshot]) -> Option<FundSummary> {
    let last = derived.last()?;

    let total_dividends_net = derived
        .iter()
        .fold(Decimal::ZERO, |acc, row| acc + row.snapshot.dividends_net);
    let total_cap_gains_net = derived
        .iter()
        .fold(Decimal::ZERO, |acc, row| acc + row.snapshot.cap_gains_net);

    Some(FundSummary {
        date: last.snapshot.date,
        market_value_gross: last.snapshot.market_value_gross,
        contrib_cum: last.snapshot.contrib_cum,
        perf_eur: last.perf_eur,
        perf_pct: last.perf_pct,
        realized_cum_net: last.realized_cum_net,
        total_dividends_net,
        total_cap_gains_net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn snap(
        date: &str,
        period: Option<&str>,
        contrib: Decimal,
        gross: Decimal,
        dividends: Decimal,
        cap_gains: Decimal,
    ) -> MarketSnapshot {
        MarketSnapshot::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            period.map(str::to_string),
            contrib,
            gross,
            dividends,
            cap_gains,
        )
    }

    #[test]
    fn test_derive_two_snapshot_scenario() {
        let snapshots = vec![
            snap("2024-01-01", None, dec!(1000), dec!(1050), dec!(10), dec!(0)),
            snap("2024-02-01", None, dec!(2000), dec!(2200), dec!(5), dec!(0)),
        ];

        let derived = derive(&snapshots);
        assert_eq!(derived.len(), 2);

        let second = &derived[1];
        assert_eq!(second.realized_cum_net, dec!(15));
        assert_eq!(second.realized_pct, dec!(0.0075));
        assert_eq!(second.invested_cum, dec!(2015));
        assert_eq!(second.perf_eur, dec!(200));
        assert_eq!(second.perf_pct, dec!(0.10));
    }

    #[test]
    fn test_derive_preserves_length_and_order() {
        let snapshots = vec![
            snap("2024-01-01", Some("2024-01"), dec!(100), dec!(100), dec!(0), dec!(0)),
            snap("2024-02-01", Some("2024-02"), dec!(200), dec!(210), dec!(1), dec!(0)),
            snap("2024-12-31", Some("2024"), dec!(200), dec!(220), dec!(2), dec!(1)),
        ];

        let derived = derive(&snapshots);
        assert_eq!(derived.len(), snapshots.len());
        for (row, snapshot) in derived.iter().zip(&snapshots) {
            assert_eq!(row.snapshot, *snapshot);
        }
    }

    #[test]
    fn test_derive_zero_contribution_base_yields_zero_ratios() {
        let snapshots = vec![snap("2024-01-01", None, dec!(0), dec!(50), dec!(10), dec!(5))];

        let derived = derive(&snapshots);
        assert_eq!(derived[0].realized_pct, dec!(0));
        assert_eq!(derived[0].perf_pct, dec!(0));
        // The absolute figures are still carried
        assert_eq!(derived[0].realized_cum_net, dec!(15));
        assert_eq!(derived[0].perf_eur, dec!(50));
    }

    #[test]
    fn test_derive_is_pure_across_calls() {
        let snapshots = vec![
            snap("2024-01-01", None, dec!(1000), dec!(1050), dec!(10), dec!(0)),
            snap("2024-02-01", None, dec!(2000), dec!(2200), dec!(5), dec!(0)),
        ];

        let first = derive(&snapshots);
        let second = derive(&snapshots);
        assert_eq!(first, second);
    }

    #[test]
    fn test_realized_is_monotonic_for_non_negative_inputs() {
        let snapshots = vec![
            snap("2024-01-01", None, dec!(100), dec!(100), dec!(3), dec!(0)),
            snap("2024-02-01", None, dec!(100), dec!(100), dec!(0), dec!(0)),
            snap("2024-03-01", None, dec!(100), dec!(100), dec!(1), dec!(2)),
        ];

        let derived = derive(&snapshots);
        let realized: Vec<_> = derived.iter().map(|r| r.realized_cum_net).collect();
        assert!(realized.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_monthly_rows_excludes_yearly_summaries() {
        let snapshots = vec![
            snap("2024-11-30", Some("2024-11"), dec!(100), dec!(100), dec!(0), dec!(0)),
            snap("2024-12-31", Some("2024"), dec!(100), dec!(110), dec!(4), dec!(0)),
            snap("2024-12-31", None, dec!(100), dec!(110), dec!(0), dec!(0)),
        ];

        let monthly = monthly_rows(&derive(&snapshots));
        assert_eq!(monthly.len(), 2);
        assert!(monthly
            .iter()
            .all(|r| r.snapshot.granularity == SnapshotGranularity::Monthly));
    }

    #[test]
    fn test_fund_summary_totals_and_last_row() {
        let snapshots = vec![
            snap("2024-01-01", None, dec!(1000), dec!(1050), dec!(10), dec!(2)),
            snap("2024-02-01", None, dec!(2000), dec!(2200), dec!(5), dec!(1)),
        ];

        let summary = fund_summary(&derive(&snapshots)).unwrap();
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(summary.market_value_gross, dec!(2200));
        assert_eq!(summary.contrib_cum, dec!(2000));
        assert_eq!(summary.perf_eur, dec!(200));
        assert_eq!(summary.realized_cum_net, dec!(18));
        assert_eq!(summary.total_dividends_net, dec!(15));
        assert_eq!(summary.total_cap_gains_net, dec!(3));
    }

    #[test]
    fn test_fund_summary_empty_series() {
        assert!(fund_summary(&[]).is_none());
    }
}
