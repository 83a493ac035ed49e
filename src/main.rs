use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use rusqlite::Connection;

use fondo::cli::formatters;
use fondo::cli::{AddCommands, Cli, Commands};
use fondo::dataset::load::{load_dataset, parse_date};
use fondo::dataset::merge::merge;
use fondo::dataset::{Dataset, MarketSnapshot, Transaction, CONTRIBUTION};
use fondo::reports::{self, Range};
use fondo::{db, utils};

fn main() -> Result<()> {
    // Initialize logging; stdout stays reserved for report output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    db::init_database(cli.db.clone())?;
    let conn = db::open_db(cli.db.clone())?;

    match &cli.command {
        Commands::Clear => {
            db::clear_overrides(&conn)?;
            println!("{} Local overrides cleared", "✓".green().bold());
            Ok(())
        }

        Commands::Add { record } => handle_add(&conn, record),

        command => {
            let base = load_dataset(&cli.data)?;
            let overlay = db::load_overrides(&conn)?;
            let data = merge(&base, &overlay);
            run_report(command, &data, cli.json)
        }
    }
}

/// Append a user-entered record to the override overlay and persist it.
fn handle_add(conn: &Connection, record: &AddCommands) -> Result<()> {
    let mut overlay = db::load_overrides(conn)?;

    match record {
        AddCommands::Contribution {
            investor,
            date,
            amount,
            note,
        } => {
            let date = parse_date(date)?;
            overlay.transactions.push(Transaction {
                kind: CONTRIBUTION.to_string(),
                investor_id: investor.clone(),
                date,
                amount: *amount,
                currency: "EUR".to_string(),
                note: note.clone(),
            });
            db::save_overrides(conn, &overlay)?;
            println!(
                "{} Contribution of {} recorded for investor {}",
                "✓".green().bold(),
                utils::format_currency(*amount),
                investor
            );
        }

        AddCommands::Snapshot {
            date,
            contrib_cum,
            market_value,
            dividends,
            cap_gains,
            period,
        } => {
            let date = parse_date(date)?;
            overlay.market_snapshots.push(MarketSnapshot::new(
                date,
                period.clone(),
                *contrib_cum,
                *market_value,
                *dividends,
                *cap_gains,
            ));
            db::save_overrides(conn, &overlay)?;
            println!("{} Snapshot for {} recorded", "✓".green().bold(), date);
        }
    }

    Ok(())
}

fn run_report(command: &Commands, data: &Dataset, json: bool) -> Result<()> {
    match command {
        Commands::Summary => {
            let derived = reports::derive(&data.market_snapshots);
            match reports::fund_summary(&derived) {
                Some(summary) if json => println!("{}", formatters::to_json(&summary)),
                Some(summary) => println!("{}", formatters::format_summary(&summary)),
                None => println!("No snapshots found"),
            }
        }

        Commands::Snapshots => {
            let derived = reports::derive(&data.market_snapshots);
            let monthly = reports::monthly_rows(&derived);
            // Last 12 months, newest first
            let rows: Vec<_> = monthly.into_iter().rev().take(12).collect();
            if rows.is_empty() {
                println!("No snapshots found");
            } else if json {
                println!("{}", formatters::to_json(&rows));
            } else {
                println!("{}", formatters::format_snapshots_table(&rows));
            }
        }

        Commands::Performance { range } => {
            let derived = reports::derive(&data.market_snapshots);
            let rows = match range {
                // A trailing window applies to the monthly series; the
                // untruncated table keeps the yearly summary rows as well.
                Some(token) => {
                    let range = token
                        .parse::<Range>()
                        .map_err(|e| anyhow::anyhow!(e))?;
                    let today = Local::now().date_naive();
                    reports::filter_by_range(&reports::monthly_rows(&derived), range, today)
                }
                None => derived,
            };
            if rows.is_empty() {
                println!("No snapshots found");
            } else if json {
                println!("{}", formatters::to_json(&rows));
            } else {
                println!("{}", formatters::format_performance_table(&rows));
            }
        }

        Commands::Contributions => {
            let grouped = reports::group_by_month(&data.transactions);
            if grouped.is_empty() {
                println!("No contributions found");
            } else if json {
                println!("{}", formatters::to_json(&grouped));
            } else {
                println!("{}", formatters::format_contributions_table(&grouped));
            }
        }

        Commands::Investors => {
            let totals = reports::totals(&data.investors, &data.transactions);
            let rows = reports::ranked(&totals, &data.investors);
            if rows.is_empty() {
                println!("No investors found");
            } else if json {
                println!("{}", formatters::to_json(&rows));
            } else {
                println!("{}", formatters::format_investors_table(&rows));
            }
        }

        Commands::Dividends => {
            let derived = reports::derive(&data.market_snapshots);
            let years = reports::yearly_dividends(&derived);
            if years.is_empty() {
                println!("No dividends found");
            } else if json {
                println!("{}", formatters::to_json(&years));
            } else {
                println!("{}", formatters::format_dividends_table(&years));
            }
        }

        Commands::Dump => {
            println!("{}", formatters::to_json(data));
        }

        // Clear and Add are handled before the dataset is loaded
        Commands::Clear | Commands::Add { .. } => unreachable!(),
    }

    Ok(())
}
