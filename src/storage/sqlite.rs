//! SQLite key-value store.
//!
//! The persistent backend behind the CLI. Each `set` is a single
//! upsert statement, so a collection rewrite is either fully visible
//! or not at all.

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::storage::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::time::Duration;
use tracing::trace;

/// How long a write waits on another process holding the lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-based key-value store.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database at the given path.
    ///
    /// Creates the database and applies schema if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
               value = excluded.value,
               updated_at = excluded.updated_at",
            rusqlite::params![key, value, now],
        )?;
        trace!(key, bytes = value.len(), "kv_store write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_memory() {
        let store = SqliteStore::open_memory().unwrap();
        assert_eq!(store.get("lostItems").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.set("lostItems", "[]").unwrap();
        assert_eq!(store.get("lostItems").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites_single_row() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.set("foundItems", "[1]").unwrap();
        store.set("foundItems", "[1,2]").unwrap();

        assert_eq!(store.get("foundItems").unwrap().as_deref(), Some("[1,2]"));
        let rows: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_values_persist_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lostfound.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("lostItems", "[{\"id\":1}]").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(
            store.get("lostItems").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }
}
