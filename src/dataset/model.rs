use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction kind tag for capital paid into the fund. Aggregators act on
/// this kind only; any other tag (e.g. "withdrawal") flows through the
/// merged dataset untouched.
pub const CONTRIBUTION: &str = "contribution";

/// An investor in the static reference list. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    pub id: String,
    pub name: String,
}

/// A dated money movement. Immutable once created; datasets only append.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: String,
    pub investor_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub currency: String,
    pub note: String,
}

impl Transaction {
    pub fn is_contribution(&self) -> bool {
        self.kind == CONTRIBUTION
    }
}

/// Row granularity of a market snapshot, assigned once at ingestion from
/// the optional `period` tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SnapshotGranularity {
    /// A date-keyed row, tagged "YYYY-MM" or untagged.
    #[default]
    Monthly,
    /// A yearly summary row, tagged "YYYY".
    Yearly,
}

impl SnapshotGranularity {
    /// A 4-character tag marks a yearly summary row; a 7-character tag or
    /// no tag at all marks a monthly row. Any other tag length is treated
    /// as monthly.
    pub fn from_period(period: Option<&str>) -> Self {
        match period {
            Some(p) if p.len() == 4 => SnapshotGranularity::Yearly,
            _ => SnapshotGranularity::Monthly,
        }
    }
}

/// A mark-to-market observation of the fund at a point in time.
///
/// `contrib_cum` (A) is cumulative contributions as of the date and
/// `market_value_gross` (G) the total mark-to-market value. Sequences are
/// append-only and must sort ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub date: NaiveDate,
    /// Raw period tag ("YYYY-MM" or "YYYY"), preserved unchanged so
    /// downstream consumers can still read it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip)]
    pub granularity: SnapshotGranularity,
    pub contrib_cum: Decimal,
    pub market_value_gross: Decimal,
    pub dividends_net: Decimal,
    pub cap_gains_net: Decimal,
}

impl MarketSnapshot {
    pub fn new(
        date: NaiveDate,
        period: Option<String>,
        contrib_cum: Decimal,
        market_value_gross: Decimal,
        dividends_net: Decimal,
        cap_gains_net: Decimal,
    ) -> Self {
        let granularity = SnapshotGranularity::from_period(period.as_deref());
        MarketSnapshot {
            date,
            period,
            granularity,
            contrib_cum,
            market_value_gross,
            dividends_net,
            cap_gains_net,
        }
    }
}

/// The full in-memory dataset: reference investors plus the two ordered
/// record sequences all reports read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub investors: Vec<Investor>,
    pub transactions: Vec<Transaction>,
    pub market_snapshots: Vec<MarketSnapshot>,
}

/// User-entered records layered on top of the read-only base dataset and
/// persisted locally. Same shape as [`Dataset`] minus the investor list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overlay {
    pub transactions: Vec<Transaction>,
    pub market_snapshots: Vec<MarketSnapshot>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.market_snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_granularity_from_period_tag() {
        assert_eq!(
            SnapshotGranularity::from_period(Some("2024")),
            SnapshotGranularity::Yearly
        );
        assert_eq!(
            SnapshotGranularity::from_period(Some("2024-03")),
            SnapshotGranularity::Monthly
        );
        assert_eq!(
            SnapshotGranularity::from_period(None),
            SnapshotGranularity::Monthly
        );
        // Unexpected tag lengths fall back to monthly
        assert_eq!(
            SnapshotGranularity::from_period(Some("2024-03-01")),
            SnapshotGranularity::Monthly
        );
    }

    #[test]
    fn test_snapshot_constructor_assigns_granularity() {
        let yearly = MarketSnapshot::new(
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            Some("2024".to_string()),
            dec!(1000),
            dec!(1100),
            dec!(10),
            dec!(5),
        );
        assert_eq!(yearly.granularity, SnapshotGranularity::Yearly);

        let untagged = MarketSnapshot::new(
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            None,
            dec!(1000),
            dec!(1100),
            dec!(0),
            dec!(0),
        );
        assert_eq!(untagged.granularity, SnapshotGranularity::Monthly);
    }

    #[test]
    fn test_contribution_kind_check() {
        let tx = Transaction {
            kind: CONTRIBUTION.to_string(),
            investor_id: "A".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            amount: dec!(100),
            currency: "EUR".to_string(),
            note: String::new(),
        };
        assert!(tx.is_contribution());

        let withdrawal = Transaction {
            kind: "withdrawal".to_string(),
            ..tx
        };
        assert!(!withdrawal.is_contribution());
    }
}
