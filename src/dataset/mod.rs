// Dataset module - domain model, ingestion and base/overlay merge

pub mod load;
pub mod merge;
pub mod model;

pub use model::{
    Dataset, Investor, MarketSnapshot, Overlay, SnapshotGranularity, Transaction, CONTRIBUTION,
};
