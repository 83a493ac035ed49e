use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

pub mod formatters;

#[derive(Parser)]
#[command(name = "fondo")]
#[command(version, about = "Fund portfolio tracker: contributions, snapshots and performance")]
#[command(
    long_about = "Track a small fund's contributions and market snapshots: a read-only base dataset (local JSON file or URL) is merged with locally stored overrides, and performance, contribution, investor and dividend reports are derived from the result."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Base dataset source: local JSON file or http(s) URL
    #[arg(long = "data", global = true, default_value = "data.json")]
    pub data: String,

    /// Path to the overrides database (default: ~/.fondo/data.db)
    #[arg(long = "db", global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fund KPIs from the latest snapshot
    Summary,

    /// Last 12 monthly snapshot rows, newest first
    Snapshots,

    /// Full performance derivation table
    Performance {
        /// Trailing window over monthly rows: 1m, ytd, 1y, 3y, 5y or max
        #[arg(long)]
        range: Option<String>,
    },

    /// Contribution totals grouped by month
    Contributions,

    /// Per-investor lifetime totals and fund share
    Investors,

    /// Net dividends by year with cumulative total
    Dividends,

    /// Record a user override on top of the base dataset
    Add {
        #[command(subcommand)]
        record: AddCommands,
    },

    /// Remove all locally stored overrides
    Clear,

    /// Dump the merged dataset as pretty JSON
    Dump,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Append a contribution transaction to the overrides
    Contribution {
        /// Investor id the contribution belongs to
        #[arg(long)]
        investor: String,

        /// Value date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Amount in euro
        #[arg(long)]
        amount: Decimal,

        /// Free-form note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Append a market snapshot to the overrides
    Snapshot {
        /// Snapshot date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Cumulative contributions as of this date
        #[arg(long = "contrib-cum")]
        contrib_cum: Decimal,

        /// Gross mark-to-market value
        #[arg(long = "market-value")]
        market_value: Decimal,

        /// Net dividends for the period
        #[arg(long, default_value = "0")]
        dividends: Decimal,

        /// Net capital gains for the period
        #[arg(long = "cap-gains", default_value = "0")]
        cap_gains: Decimal,

        /// Optional period tag: YYYY-MM (monthly) or YYYY (yearly summary)
        #[arg(long)]
        period: Option<String>,
    },
}
