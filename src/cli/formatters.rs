//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of data calculation from presentation.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::reports::{
    DerivedSnapshot, FundSummary, InvestorShare, MonthlyContribution, YearlyDividends,
};
use crate::utils::{format_currency, format_percent};

/// Serialize any report for `--json` output.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

fn signed_currency(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format_currency(value).green().to_string()
    } else {
        format_currency(value).red().to_string()
    }
}

fn signed_percent(ratio: Decimal) -> String {
    if ratio >= Decimal::ZERO {
        format_percent(ratio).green().to_string()
    } else {
        format_percent(ratio).red().to_string()
    }
}

/// Format the fund KPI panel.
pub fn format_summary(summary: &FundSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} Fund summary as of {}\n\n",
        "📊".cyan().bold(),
        summary.date
    ));
    output.push_str(&format!(
        "  Market value (G):       {}\n",
        format_currency(summary.market_value_gross)
    ));
    output.push_str(&format!(
        "  Contributions CUM (A):  {}\n",
        format_currency(summary.contrib_cum)
    ));
    output.push_str(&format!(
        "  Performance (H = G-A):  {}\n",
        signed_currency(summary.perf_eur)
    ));
    output.push_str(&format!(
        "  Performance % (I):      {}\n",
        signed_percent(summary.perf_pct)
    ));
    output.push_str(&format!(
        "  Realized CUM (net):     {}\n",
        signed_currency(summary.realized_cum_net)
    ));
    output.push_str(&format!(
        "    of which dividends:   {}\n",
        format_currency(summary.total_dividends_net)
    ));
    output.push_str(&format!(
        "    of which cap. gains:  {}\n",
        format_currency(summary.total_cap_gains_net)
    ));

    output
}

/// Format the snapshot table (monthly rows, newest first).
pub fn format_snapshots_table(rows: &[DerivedSnapshot]) -> String {
    #[derive(Tabled)]
    struct SnapshotRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Contrib CUM (A)")]
        contrib_cum: String,
        #[tabled(rename = "Dividends")]
        dividends: String,
        #[tabled(rename = "Cap gains")]
        cap_gains: String,
        #[tabled(rename = "Market value (G)")]
        market_value: String,
        #[tabled(rename = "Perf (H)")]
        perf_eur: String,
        #[tabled(rename = "Perf % (I)")]
        perf_pct: String,
    }

    let table_rows: Vec<SnapshotRow> = rows
        .iter()
        .map(|r| SnapshotRow {
            date: r.snapshot.date.to_string(),
            contrib_cum: format_currency(r.snapshot.contrib_cum),
            dividends: format_currency(r.snapshot.dividends_net),
            cap_gains: format_currency(r.snapshot.cap_gains_net),
            market_value: format_currency(r.snapshot.market_value_gross),
            perf_eur: signed_currency(r.perf_eur),
            perf_pct: signed_percent(r.perf_pct),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format the full performance derivation table. Yearly summary rows are
/// labeled by their period tag, date-keyed rows by their date.
pub fn format_performance_table(rows: &[DerivedSnapshot]) -> String {
    #[derive(Tabled)]
    struct PerformanceRow {
        #[tabled(rename = "Period")]
        period: String,
        #[tabled(rename = "Contrib CUM (A)")]
        contrib_cum: String,
        #[tabled(rename = "Dividends")]
        dividends: String,
        #[tabled(rename = "Cap gains")]
        cap_gains: String,
        #[tabled(rename = "Realized CUM")]
        realized_cum: String,
        #[tabled(rename = "Realized %")]
        realized_pct: String,
        #[tabled(rename = "Invested CUM")]
        invested_cum: String,
        #[tabled(rename = "Market value (G)")]
        market_value: String,
        #[tabled(rename = "Perf (H)")]
        perf_eur: String,
        #[tabled(rename = "Perf % (I)")]
        perf_pct: String,
    }

    let table_rows: Vec<PerformanceRow> = rows
        .iter()
        .map(|r| PerformanceRow {
            period: r
                .snapshot
                .period
                .clone()
                .unwrap_or_else(|| r.snapshot.date.to_string()),
            contrib_cum: format_currency(r.snapshot.contrib_cum),
            dividends: format_currency(r.snapshot.dividends_net),
            cap_gains: format_currency(r.snapshot.cap_gains_net),
            realized_cum: format_currency(r.realized_cum_net),
            realized_pct: format_percent(r.realized_pct),
            invested_cum: format_currency(r.invested_cum),
            market_value: format_currency(r.snapshot.market_value_gross),
            perf_eur: signed_currency(r.perf_eur),
            perf_pct: signed_percent(r.perf_pct),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format per-month contribution totals.
pub fn format_contributions_table(rows: &[MonthlyContribution]) -> String {
    #[derive(Tabled)]
    struct ContributionRow {
        #[tabled(rename = "Month")]
        month: String,
        #[tabled(rename = "Contributions")]
        total: String,
    }

    let table_rows: Vec<ContributionRow> = rows
        .iter()
        .map(|r| ContributionRow {
            month: r.month.clone(),
            total: format_currency(r.total),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format the ranked investor listing.
pub fn format_investors_table(rows: &[InvestorShare]) -> String {
    #[derive(Tabled)]
    struct InvestorRow {
        #[tabled(rename = "Investor")]
        name: String,
        #[tabled(rename = "Total")]
        total: String,
        #[tabled(rename = "Share")]
        share: String,
    }

    let table_rows: Vec<InvestorRow> = rows
        .iter()
        .map(|r| InvestorRow {
            name: r.name.clone(),
            total: format_currency(r.total),
            share: format_percent(r.share),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Format the yearly dividend series.
pub fn format_dividends_table(rows: &[YearlyDividends]) -> String {
    #[derive(Tabled)]
    struct DividendRow {
        #[tabled(rename = "Year")]
        year: String,
        #[tabled(rename = "Dividends (net)")]
        dividends: String,
        #[tabled(rename = "Cumulative")]
        cumulative: String,
    }

    let table_rows: Vec<DividendRow> = rows
        .iter()
        .map(|r| DividendRow {
            year: r.year.clone(),
            dividends: format_currency(r.dividends_net),
            cumulative: format_currency(r.dividends_cum),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}
