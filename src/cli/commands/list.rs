//! List command: the board's home view.

use crate::cli::ListScope;
use crate::cli::commands::{Output, open_board};
use crate::error::Result;
use std::path::PathBuf;

/// Render the requested collections.
///
/// In JSON mode each collection is written as its own line.
///
/// # Errors
///
/// Returns an error if the board is not initialized or cannot be read.
pub fn execute(scope: ListScope, db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    let mut board = open_board(db_path, output.view())?;

    match scope {
        ListScope::All => board.load(),
        ListScope::Lost => board.render_lost(),
        ListScope::Found => board.render_found(),
    }
}
