//! Lost & Found board - a local bulletin board for lost and found items.
//!
//! This crate provides the core functionality for the `lf` CLI tool.
//!
//! # Architecture
//!
//! - [`storage`] - Key-value storage port, SQLite/in-memory backends, record store
//! - [`model`] - Data types (LostItem, FoundItem, Collection)
//! - [`factory`] - Record construction, id assignment, inline image encoding
//! - [`query`] - Keyword search over both collections
//! - [`render`] - View trait and terminal renderer
//! - [`board`] - Lifecycle controller wiring actions to the above
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Database path resolution
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod model;
pub mod query;
pub mod render;
pub mod storage;

pub use error::{Error, Result};

/// Global silent mode flag for `--silent` output.
///
/// When set, report commands print only the new record id and
/// success notifications are suppressed.
pub static SILENT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global CSV output flag (set when `--format csv`).
pub static CSV_OUTPUT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if silent mode is active.
#[inline]
pub fn is_silent() -> bool {
    SILENT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Check if CSV output is requested.
#[inline]
pub fn is_csv() -> bool {
    CSV_OUTPUT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Escape a value for CSV output (wrap in quotes if it contains commas, quotes, or newlines).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_escape_plain() {
        assert_eq!(csv_escape("Wallet"), "Wallet");
    }

    #[test]
    fn test_csv_escape_quotes_and_commas() {
        assert_eq!(csv_escape("Gym, locker 3"), "\"Gym, locker 3\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
