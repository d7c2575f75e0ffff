//! Command implementations.

pub mod completions;
pub mod found;
pub mod init;
pub mod list;
pub mod lost;
pub mod search;
pub mod version;

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::board::Board;
use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::render::{Confirmation, OutputMode, TerminalView};
use crate::storage::SqliteStore;

/// Output settings shared by every board command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub mode: OutputMode,
    pub silent: bool,
    pub assume_yes: bool,
}

impl Output {
    /// View for commands that display the board (list, search).
    #[must_use]
    pub fn view(&self) -> TerminalView<std::io::Stdout> {
        TerminalView::stdout(self.mode).with_confirmation(self.confirmation())
    }

    /// View for mutating commands.
    ///
    /// Table mode shows the notice and the refreshed collection; JSON and
    /// silent modes leave the output to the command's own summary.
    #[must_use]
    pub fn mutation_view(&self) -> TerminalView<std::io::Stdout> {
        let summary_only = self.silent || self.mode != OutputMode::Table;
        self.view()
            .with_collections(!summary_only)
            .with_quiet_notices(self.silent)
    }

    fn confirmation(&self) -> Confirmation {
        confirmation_for(self.assume_yes, std::io::stdin().is_terminal())
    }
}

/// `--yes` wins; otherwise only an interactive stdin gets asked.
fn confirmation_for(assume_yes: bool, interactive: bool) -> Confirmation {
    match (assume_yes, interactive) {
        (true, _) => Confirmation::Assume,
        (false, true) => Confirmation::Prompt,
        (false, false) => Confirmation::Decline,
    }
}

/// Open the board on the resolved database.
///
/// # Errors
///
/// Returns [`Error::NotInitialized`] when the database file does not exist.
pub fn open_board(
    db_path: Option<&PathBuf>,
    view: TerminalView<std::io::Stdout>,
) -> Result<Board<SqliteStore, TerminalView<std::io::Stdout>>> {
    let db_path = resolve_db_path(db_path.map(|p| p.as_path())).ok_or(Error::NotInitialized)?;

    if !db_path.exists() {
        return Err(Error::NotInitialized);
    }

    let store = SqliteStore::open(&db_path)?;
    Ok(Board::new(store, view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_flag_always_confirms() {
        assert_eq!(confirmation_for(true, true), Confirmation::Assume);
        assert_eq!(confirmation_for(true, false), Confirmation::Assume);
    }

    #[test]
    fn test_non_interactive_stdin_declines() {
        assert_eq!(confirmation_for(false, false), Confirmation::Decline);
        assert_eq!(confirmation_for(false, true), Confirmation::Prompt);
    }
}
