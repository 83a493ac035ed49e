//! Merge of the base dataset with the user override overlay.

use crate::dataset::model::{Dataset, Overlay};

/// Combine a base dataset with an overlay into one chronologically ordered
/// dataset. Copy-on-merge: neither input is mutated.
///
/// Transactions and snapshots are each concatenated base-then-overlay and
/// stable-sorted ascending by date, so records sharing a date keep base
/// records ahead of overlay records. No de-duplication happens here:
/// callers own record uniqueness, and an overlay record identical to a
/// base record appears twice.
pub fn merge(base: &Dataset, overlay: &Overlay) -> Dataset {
    let mut transactions = base.transactions.clone();
    transactions.extend(overlay.transactions.iter().cloned());
    transactions.sort_by_key(|t| t.date);

    let mut market_snapshots = base.market_snapshots.clone();
    market_snapshots.extend(overlay.market_snapshots.iter().cloned());
    market_snapshots.sort_by_key(|s| s.date);

    Dataset {
        investors: base.investors.clone(),
        transactions,
        market_snapshots,
    }
}
