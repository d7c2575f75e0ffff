//! Configuration management.
//!
//! Resolves where the board database lives. Everything is local to the
//! machine: one SQLite file under `~/.lostfound/`.

use std::path::{Path, PathBuf};

/// File name of the board database.
pub const DB_FILE_NAME: &str = "lostfound.db";

/// Get the global Lost & Found directory location (`~/.lostfound/`).
#[must_use]
pub fn global_lostfound_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".lostfound"))
}

/// Check if test mode is enabled.
///
/// Test mode is enabled by setting `LF_TEST_DB=1` (or any non-empty value
/// other than `0`/`false`). This redirects the CLI to an isolated database.
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var("LF_TEST_DB").is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

/// Directory holding the database: `data/`, or `test/` in test mode.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    let sub = if is_test_mode() { "test" } else { "data" };
    global_lostfound_dir().map(|dir| dir.join(sub))
}

/// Resolve the database path.
///
/// Priority:
/// 1. `explicit_path` (the `--db` flag or `LF_DB`)
/// 2. `LF_TEST_DB` test mode → `~/.lostfound/test/lostfound.db`
/// 3. `LOSTFOUND_DB` environment variable
/// 4. `~/.lostfound/data/lostfound.db`
#[must_use]
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if is_test_mode() {
        return data_dir().map(|dir| dir.join(DB_FILE_NAME));
    }

    if let Ok(db_path) = std::env::var("LOSTFOUND_DB") {
        if !db_path.trim().is_empty() {
            return Some(PathBuf::from(db_path));
        }
    }

    data_dir().map(|dir| dir.join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_db_path_with_explicit() {
        let explicit = PathBuf::from("/custom/path/board.db");
        let result = resolve_db_path(Some(&explicit));
        assert_eq!(result, Some(explicit));
    }

    #[test]
    fn test_resolve_db_path_default_file_name() {
        let path = resolve_db_path(None).unwrap();
        assert!(path.ends_with(DB_FILE_NAME) || std::env::var("LOSTFOUND_DB").is_ok());
    }

    #[test]
    fn test_global_dir_is_hidden_home_dir() {
        let dir = global_lostfound_dir().unwrap();
        assert!(dir.ends_with(".lostfound"));
    }

    #[test]
    fn test_truthy_parsing() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("FALSE"));
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("yes"));
    }
}
