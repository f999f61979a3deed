//! Raw key/value records.

use rusqlite::{params, Connection, OptionalExtension, Result};
use serde::{de::DeserializeOwned, Serialize};

pub fn get_record(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM storage WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

pub fn put_record(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO storage (key, value, updated_at) VALUES (?1, ?2, datetime('now'))",
        params![key, value],
    )?;
    Ok(())
}

pub fn delete_record(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM storage WHERE key = ?1", params![key])?;
    Ok(())
}

/// Read a JSON record.
///
/// A missing record is `Ok(None)`. A record that no longer parses is logged
/// and also treated as missing.
pub fn get_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let Some(raw) = get_record(conn, key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Discarding malformed record '{}': {}", key, e);
            Ok(None)
        }
    }
}

pub fn put_json<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let raw =
        serde_json::to_string(value).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    put_record(conn, key, &raw)
}
