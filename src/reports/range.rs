//! Trailing-window filters over the derived snapshot series.
//!
//! The anchor date is always injected by the caller; the CLI passes
//! today's local date.

use chrono::{Datelike, Months, NaiveDate};
use std::str::FromStr;

use crate::reports::performance::DerivedSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    OneMonth,
    YearToDate,
    OneYear,
    ThreeYears,
    FiveYears,
    Max,
}

impl FromStr for Range {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Range::OneMonth),
            "ytd" => Ok(Range::YearToDate),
            "1y" => Ok(Range::OneYear),
            "3y" => Ok(Range::ThreeYears),
            "5y" => Ok(Range::FiveYears),
            "max" => Ok(Range::Max),
            other => Err(format!(
                "unknown range '{}' (expected 1m, ytd, 1y, 3y, 5y or max)",
                other
            )),
        }
    }
}

/// First date inside the window, or `None` for the unbounded range.
pub fn cutoff(range: Range, today: NaiveDate) -> Option<NaiveDate> {
    match range {
        Range::Max => None,
        Range::OneMonth => today.checked_sub_months(Months::new(1)),
        Range::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
        Range::OneYear => today.checked_sub_months(Months::new(12)),
        Range::ThreeYears => today.checked_sub_months(Months::new(36)),
        Range::FiveYears => today.checked_sub_months(Months::new(60)),
    }
}

/// Keep rows dated on or after the window cutoff.
pub fn filter_by_range(
    rows: &[DerivedSnapshot],
    range: Range,
    today: NaiveDate,
) -> Vec<DerivedSnapshot> {
    match cutoff(range, today) {
        None => rows.to_vec(),
        Some(cut) => rows
            .iter()
            .filter(|row| row.snapshot.date >= cut)
            .cloned()
            .collect(),
    }
}
