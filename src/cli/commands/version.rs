//! Version command implementation.

use crate::config::resolve_db_path;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    database: Option<PathBuf>,
}

/// Print the version, build profile and the database the CLI would use.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) { "dev" } else { "release" };
    let database = resolve_db_path(db_path.map(|p| p.as_path()));

    if json {
        let output = VersionOutput {
            version,
            build,
            database,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("lf version {version} ({build})");
    if let Some(path) = database {
        println!("  database: {}", path.display());
    }
    Ok(())
}
