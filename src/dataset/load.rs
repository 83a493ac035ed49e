//! Base dataset and overlay ingestion
//!
//! Raw serde mirror types absorb the looseness of the source JSON (amounts
//! may be absent, a number, or a numeric string) and convert into the
//! strict domain types exactly once. Monetary coercion never fails; a
//! malformed date fails loudly with a parse error naming the record.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::info;

use crate::dataset::model::{Dataset, Investor, MarketSnapshot, Overlay, Transaction};
use crate::error::PortfolioError;

/// Parse an ISO calendar date ("YYYY-MM-DD").
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| PortfolioError::ParseError(format!("invalid date '{}'", s)).into())
}

/// Coerce a loose JSON value to a Decimal. Missing, null and non-numeric
/// values normalize to zero; numeric strings are accepted alongside JSON
/// numbers. Numbers go through their literal representation so no float
/// precision is lost.
fn coerce_decimal(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn decimal_or_zero<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_decimal(value.as_ref()))
}

fn default_currency() -> String {
    "EUR".to_string()
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    investor_id: String,
    date: String,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    amount: Decimal,
    #[serde(default = "default_currency")]
    currency: String,
    #[serde(default)]
    note: String,
}

impl RawTransaction {
    fn into_transaction(self) -> Result<Transaction> {
        let date = parse_date(&self.date).with_context(|| {
            format!(
                "in transaction '{}' for investor '{}'",
                self.kind, self.investor_id
            )
        })?;
        Ok(Transaction {
            kind: self.kind,
            investor_id: self.investor_id,
            date,
            amount: self.amount,
            currency: self.currency,
            note: self.note,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    date: String,
    #[serde(default)]
    period: Option<String>,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    contrib_cum: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    market_value_gross: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    dividends_net: Decimal,
    #[serde(default, deserialize_with = "decimal_or_zero")]
    cap_gains_net: Decimal,
}

impl RawSnapshot {
    fn into_snapshot(self) -> Result<MarketSnapshot> {
        let date = parse_date(&self.date)
            .with_context(|| format!("in market snapshot tagged {:?}", self.period))?;
        Ok(MarketSnapshot::new(
            date,
            self.period,
            self.contrib_cum,
            self.market_value_gross,
            self.dividends_net,
            self.cap_gains_net,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    investors: Vec<Investor>,
    #[serde(default)]
    transactions: Vec<RawTransaction>,
    #[serde(default)]
    market_snapshots: Vec<RawSnapshot>,
}

#[derive(Debug, Deserialize)]
struct RawOverlay {
    #[serde(default)]
    transactions: Vec<RawTransaction>,
    #[serde(default)]
    market_snapshots: Vec<RawSnapshot>,
}

fn convert_transactions(raw: Vec<RawTransaction>) -> Result<Vec<Transaction>> {
    raw.into_iter().map(RawTransaction::into_transaction).collect()
}

fn convert_snapshots(raw: Vec<RawSnapshot>) -> Result<Vec<MarketSnapshot>> {
    raw.into_iter().map(RawSnapshot::into_snapshot).collect()
}

/// Parse a base dataset JSON document. Missing top-level arrays default to
/// empty sequences.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let raw: RawDataset =
        serde_json::from_str(json).context("base dataset is not valid JSON")?;
    Ok(Dataset {
        investors: raw.investors,
        transactions: convert_transactions(raw.transactions)?,
        market_snapshots: convert_snapshots(raw.market_snapshots)?,
    })
}

/// Parse a stored overlay JSON document. The caller decides what a parse
/// failure means; the override store recovers to the empty overlay.
pub fn parse_overlay(json: &str) -> Result<Overlay> {
    let raw: RawOverlay =
        serde_json::from_str(json).context("overlay is not valid JSON")?;
    Ok(Overlay {
        transactions: convert_transactions(raw.transactions)?,
        market_snapshots: convert_snapshots(raw.market_snapshots)?,
    })
}

/// Load the base dataset from a local JSON file or, for http(s) sources,
/// with a single one-shot GET. No streaming, no retries.
pub fn load_dataset(source: &str) -> Result<Dataset> {
    let body = if source.starts_with("http://") || source.starts_with("https://") {
        info!("Fetching base dataset from {}", source);
        reqwest::blocking::get(source)
            .with_context(|| format!("Failed to fetch base dataset from {}", source))?
            .error_for_status()
            .context("Base dataset fetch returned error status")?
            .text()
            .context("Failed to read base dataset body")?
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read base dataset at {}", source))?
    };

    let dataset = parse_dataset(&body)?;
    info!(
        "Loaded base dataset: {} investors, {} transactions, {} snapshots",
        dataset.investors.len(),
        dataset.transactions.len(),
        dataset.market_snapshots.len()
    );
    Ok(dataset)
}
