//! The two record collections and their fixed status values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independent named record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Lost,
    Found,
}

impl Collection {
    /// Storage key the collection is persisted under.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Lost => "lostItems",
            Self::Found => "foundItems",
        }
    }

    /// Get the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }

    /// Capitalized noun for headings and messages.
    #[must_use]
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
        }
    }

    /// Question asked before a record of this collection is resolved.
    #[must_use]
    pub const fn resolve_prompt(&self) -> &'static str {
        match self {
            Self::Lost => "Mark this item as found?",
            Self::Found => "Mark this item as returned?",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status stamped on every record; fixed by the record's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(Collection::Lost.key(), "lostItems");
        assert_eq!(Collection::Found.key(), "foundItems");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemStatus::Lost).unwrap(), "\"lost\"");
        assert_eq!(serde_json::to_string(&ItemStatus::Found).unwrap(), "\"found\"");
    }
}
