//! Fondo - fund portfolio tracker
//!
//! This library loads a base dataset of transactions and market snapshots,
//! merges in locally persisted user overrides, and derives performance,
//! contribution, investor and dividend reports from the result.

pub mod cli;
pub mod dataset;
pub mod db;
pub mod error;
pub mod reports;
pub mod utils;
