//! Yearly net-dividend series.
//!
//! Years covered by a yearly summary row use that row's figure. Years that
//! only have monthly rows so far (typically the current year) are
//! reconstructed by summing the monthly figures. Rows without a period tag
//! never participate: they are date-keyed and carry no year bucket.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::dataset::SnapshotGranularity;
use crate::reports::performance::DerivedSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyDividends {
    /// "YYYY" key, ascending.
    pub year: String,
    pub dividends_net: Decimal,
    /// Running sum of `dividends_net` up to and including this year.
    pub dividends_cum: Decimal,
}

pub fn yearly_dividends(derived: &[DerivedSnapshot]) -> Vec<YearlyDividends> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut summarized: HashSet<String> = HashSet::new();

    for row in derived {
        if row.snapshot.granularity != SnapshotGranularity::Yearly {
            continue;
        }
        if let Some(year) = row.snapshot.period.as_deref() {
            *totals.entry(year.to_string()).or_insert(Decimal::ZERO) +=
                row.snapshot.dividends_net;
            summarized.insert(year.to_string());
        }
    }

    for row in derived {
        let Some(period) = row.snapshot.period.as_deref() else {
            continue;
        };
        if period.len() != 7 {
            continue;
        }
        let year = &period[..4];
        if summarized.contains(year) {
            continue;
        }
        *totals.entry(year.to_string()).or_insert(Decimal::ZERO) += row.snapshot.dividends_net;
    }

    let mut cum = Decimal::ZERO;
    totals
        .into_iter()
        .map(|(year, dividends_net)| {
            cum += dividends_net;
            YearlyDividends {
                year,
                dividends_net,
                dividends_cum: cum,
            }
        })
        .collect()
}
