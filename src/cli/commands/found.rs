//! Found item command implementations.
//!
//! Reporting with `--image` is the only async path of the CLI: the photo
//! is read on a current-thread tokio runtime before the record is stored.

use crate::cli::commands::lost::resolve;
use crate::cli::commands::{Output, open_board};
use crate::cli::{FoundCommands, FoundReportArgs};
use crate::error::Result;
use crate::model::{Collection, FoundReport};
use crate::render::{OutputMode, TerminalView, View};
use std::path::PathBuf;

/// Execute found item commands.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or updated, or the
/// image cannot be read.
pub fn execute(command: &FoundCommands, db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    match command {
        FoundCommands::Report(args) => report(args, db_path, output),
        FoundCommands::Resolve { id } => resolve(Collection::Found, *id, db_path, output),
    }
}

fn report(args: &FoundReportArgs, db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    let mut board = open_board(db_path, output.mutation_view())?;

    let report = FoundReport {
        item_name: args.item_name.clone(),
        found_date: args.date.clone(),
        found_location: args.location.clone(),
        finder_contact: args.contact.clone(),
        description: args.description.clone(),
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let item = rt.block_on(board.report_found(report, args.image.as_deref()))?;

    if output.silent {
        println!("{}", item.id);
    } else if output.mode == OutputMode::Json {
        println!("{}", serde_json::to_string(&item)?);
    } else if output.mode == OutputMode::Csv {
        TerminalView::stdout(OutputMode::Csv).render_found(std::slice::from_ref(&item))?;
    }

    Ok(())
}
