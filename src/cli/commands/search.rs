//! Search command implementation.

use crate::cli::commands::{Output, open_board};
use crate::error::Result;
use std::path::PathBuf;

/// Search both collections. A blank term is reported inline, not as an error.
///
/// # Errors
///
/// Returns an error if the board is not initialized or cannot be read.
pub fn execute(term: &[String], db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    let mut board = open_board(db_path, output.view())?;
    board.search(&term.join(" "))?;
    Ok(())
}
