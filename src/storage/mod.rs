//! Storage layer for the Lost & Found board.
//!
//! Persistence is split in two:
//! - a [`KeyValueStore`] port holding serialized text under string keys
//! - the [`RecordStore`], which keeps each collection as one JSON array
//!
//! # Submodules
//!
//! - [`memory`] - In-memory key-value store (tests, dry runs)
//! - [`records`] - Collection list/append/remove over any key-value store
//! - [`schema`] - SQLite schema definitions
//! - [`sqlite`] - SQLite-backed key-value store used by the CLI

pub mod memory;
pub mod records;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use records::RecordStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Persistent key-value text storage.
///
/// Values are opaque text; the record store decides their format.
/// A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
