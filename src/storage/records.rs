//! Record store: the two collections over a key-value store.
//!
//! Each collection is one JSON array under its fixed key. Every
//! operation reads the whole array and, for mutations, writes the whole
//! array back with a single `set`. Collections are small, so there is
//! no indexing or pagination.

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::Record;
use crate::storage::KeyValueStore;

/// Typed access to the lost and found collections.
///
/// The collection is chosen by the record type:
/// `store.list::<LostItem>()` reads `lostItems`.
#[derive(Debug)]
pub struct RecordStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Borrow the underlying key-value store.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// List every record of `R`'s collection in insertion order.
    ///
    /// A missing key yields an empty list. So does a stored value that
    /// cannot be parsed; that case is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend read fails.
    pub fn list<R: Record>(&self) -> Result<Vec<R>> {
        let key = R::COLLECTION.key();
        let Some(raw) = self.backend.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<R>>>(&raw) {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(e) => {
                warn!(key, error = %e, "malformed collection, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append a record to the end of its collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub fn append<R: Record>(&mut self, record: &R) -> Result<()>
    where
        R: Clone,
    {
        let mut records = self.list::<R>()?;
        records.push(record.clone());
        self.write(&records)?;
        debug!(
            collection = R::COLLECTION.as_str(),
            id = record.id(),
            len = records.len(),
            "record appended"
        );
        Ok(())
    }

    /// Remove every record of `R`'s collection whose id equals `id`.
    ///
    /// Returns how many records were removed (normally 0 or 1). The
    /// collection is rewritten even when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or write fails.
    pub fn remove<R: Record>(&mut self, id: i64) -> Result<usize> {
        let records = self.list::<R>()?;
        let before = records.len();
        let kept: Vec<R> = records.into_iter().filter(|r| r.id() != id).collect();
        let removed = before - kept.len();
        self.write(&kept)?;
        debug!(collection = R::COLLECTION.as_str(), id, removed, "records removed");
        Ok(removed)
    }

    fn write<R: Record>(&mut self, records: &[R]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        self.backend.set(R::COLLECTION.key(), &payload)
    }
}
