// Database module - SQLite-backed override store

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::dataset::load::parse_overlay;
use crate::dataset::Overlay;

/// Storage key for the user override overlay. The whole overlay lives
/// under this one key as a single JSON document.
const OVERRIDES_KEY: &str = "portfolio_overrides_v1";

/// Get the default database path (~/.fondo/data.db)
pub fn get_default_db_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let fondo_dir = PathBuf::from(home).join(".fondo");

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&fondo_dir).context("Failed to create .fondo directory")?;

    Ok(fondo_dir.join("data.db"))
}

/// Open database connection
pub fn open_db(db_path: Option<PathBuf>) -> Result<Connection> {
    let path = db_path.unwrap_or(get_default_db_path()?);
    let conn = Connection::open(&path).context(format!("Failed to open database at {:?}", path))?;

    Ok(conn)
}

/// Initialize the database with schema
///
/// This function creates the database file and runs the schema SQL
/// to set up the override store table.
pub fn init_database(db_path: Option<PathBuf>) -> Result<()> {
    let path = db_path.unwrap_or(get_default_db_path()?);

    info!("Initializing database at: {:?}", path);

    let conn = open_db(Some(path))?;

    let schema_sql = include_str!("schema.sql");

    conn.execute_batch(schema_sql)
        .context("Failed to execute schema")?;

    Ok(())
}

/// Load the persisted override overlay.
///
/// Returns the empty overlay when nothing is stored, and also when the
/// stored value does not parse: corruption is recovered locally and never
/// surfaces to the caller.
pub fn load_overrides(conn: &Connection) -> Result<Overlay> {
    let mut stmt = conn.prepare("SELECT value FROM overrides WHERE key = ?1")?;
    let stored: Option<String> = stmt
        .query_row([OVERRIDES_KEY], |row| row.get(0))
        .optional()?;

    let Some(json) = stored else {
        return Ok(Overlay::default());
    };

    match parse_overlay(&json) {
        Ok(overlay) => Ok(overlay),
        Err(e) => {
            warn!("Stored overrides are corrupt, falling back to empty overlay: {e:#}");
            Ok(Overlay::default())
        }
    }
}

/// Persist the override overlay, replacing any prior value.
pub fn save_overrides(conn: &Connection, overlay: &Overlay) -> Result<()> {
    let json = serde_json::to_string(overlay).context("Failed to serialize overrides")?;
    conn.execute(
        "INSERT INTO overrides (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![OVERRIDES_KEY, json],
    )?;
    Ok(())
}

/// Remove all persisted override state.
pub fn clear_overrides(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM overrides WHERE key = ?1", [OVERRIDES_KEY])?;
    Ok(())
}
