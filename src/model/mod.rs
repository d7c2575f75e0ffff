//! Data models for the Lost & Found board.
//!
//! This module contains all domain models:
//! - LostItem (with its `LostReport` form input)
//! - FoundItem (with its `FoundReport` form input)
//! - Collection (the two named record sets)

pub mod collection;
pub mod found;
pub mod lost;

pub use collection::{Collection, ItemStatus};
pub use found::{FoundItem, FoundReport};
pub use lost::{LostItem, LostReport};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record stored in one of the two collections.
///
/// The implementing type decides which collection it lives in, so the
/// record store can be addressed by type (`store.list::<LostItem>()`).
pub trait Record: Serialize + DeserializeOwned {
    /// Collection this record type is persisted under.
    const COLLECTION: Collection;

    /// Record identifier, unique within its collection.
    fn id(&self) -> i64;

    /// Display name of the item.
    fn item_name(&self) -> &str;
}

/// Normalize optional form text: blank input means absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
