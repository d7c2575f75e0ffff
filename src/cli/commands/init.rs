//! Create the board database.
//!
//! The board lives in a single SQLite file, by default
//! `~/.lostfound/data/lostfound.db`. `--db` (or `LF_DB`) points it
//! elsewhere.

use crate::config::{global_lostfound_dir, resolve_db_path};
use crate::error::{Error, Result};
use crate::storage::SqliteStore;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Serialize)]
struct InitOutput {
    database: PathBuf,
    reinitialized: bool,
}

/// Execute the init command.
///
/// # Errors
///
/// Returns [`Error::AlreadyInitialized`] if the database exists and
/// `force` is not set, or an error if the file cannot be created.
pub fn execute(db_path: Option<&PathBuf>, force: bool, json: bool) -> Result<()> {
    let db_path = resolve_db_path(db_path.map(|p| p.as_path())).ok_or_else(|| {
        Error::Config("Could not determine the Lost & Found data directory".to_string())
    })?;

    let existed = db_path.exists();
    if existed && !force {
        return Err(Error::AlreadyInitialized { path: db_path });
    }

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if existed {
        fs::remove_file(&db_path)?;
    }

    // Opening applies the schema.
    SqliteStore::open(&db_path)?;
    info!(path = %db_path.display(), "board database created");

    // Keep the global directory out of version control if someone adds it.
    if let Some(base_dir) = global_lostfound_dir() {
        if db_path.starts_with(&base_dir) {
            let gitignore_path = base_dir.join(".gitignore");
            if !gitignore_path.exists() {
                fs::write(&gitignore_path, "# Lost & Found data is local-only\n*\n")?;
            }
        }
    }

    if json {
        let output = InitOutput {
            database: db_path,
            reinitialized: existed,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized Lost & Found board");
        println!("  Database: {}", db_path.display());
        println!();
        println!("Next: lf lost report <item> --date <date>   or   lf list");
    }

    Ok(())
}
