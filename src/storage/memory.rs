//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// Key-value store backed by a `HashMap`, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the record layer.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("lostItems").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut store = MemoryStore::new().with_entry("k", "old");
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }
}
