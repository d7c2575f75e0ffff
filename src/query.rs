//! Keyword search over both collections.
//!
//! Matching is a case-insensitive substring test. Lost items match on
//! name or location, found items on name or found location. The two
//! result sets stay separate and keep collection order; nothing is
//! ranked.

use serde::Serialize;

use crate::model::{FoundItem, LostItem};

/// Matches from both collections, in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub lost: Vec<LostItem>,
    pub found: Vec<FoundItem>,
}

impl SearchResults {
    /// True when neither collection matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }

    /// Total number of matches across both collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lost.len() + self.found.len()
    }
}

/// Result of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was empty or whitespace; nothing was searched.
    InvalidQuery,
    Matches(SearchResults),
}

impl SearchOutcome {
    /// The matches, if the query was valid.
    #[must_use]
    pub fn results(&self) -> Option<&SearchResults> {
        match self {
            Self::InvalidQuery => None,
            Self::Matches(results) => Some(results),
        }
    }
}

/// Search both collections for `term`.
#[must_use]
pub fn search(term: &str, lost: &[LostItem], found: &[FoundItem]) -> SearchOutcome {
    if term.trim().is_empty() {
        return SearchOutcome::InvalidQuery;
    }
    let needle = term.to_lowercase();

    let lost = lost
        .iter()
        .filter(|item| lost_matches(item, &needle))
        .cloned()
        .collect();
    let found = found
        .iter()
        .filter(|item| found_matches(item, &needle))
        .cloned()
        .collect();

    SearchOutcome::Matches(SearchResults { lost, found })
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn lost_matches(item: &LostItem, needle: &str) -> bool {
    contains_ci(&item.item_name, needle)
        || item
            .location
            .as_deref()
            .is_some_and(|location| contains_ci(location, needle))
}

fn found_matches(item: &FoundItem, needle: &str) -> bool {
    contains_ci(&item.item_name, needle) || contains_ci(&item.found_location, needle)
}
