//! Lost item command implementations.

use crate::board::Resolution;
use crate::cli::commands::{Output, open_board};
use crate::cli::{LostCommands, LostReportArgs};
use crate::error::{Error, Result};
use crate::model::{Collection, LostReport};
use crate::render::{OutputMode, TerminalView, View};
use serde::Serialize;
use std::path::PathBuf;

/// Output for a resolve command (shared with found items).
#[derive(Serialize)]
pub(crate) struct ResolveOutput {
    pub id: i64,
    pub collection: Collection,
    pub resolved: bool,
}

/// Execute lost item commands.
///
/// # Errors
///
/// Returns an error if the board cannot be opened or updated.
pub fn execute(command: &LostCommands, db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    match command {
        LostCommands::Report(args) => report(args, db_path, output),
        LostCommands::Resolve { id } => resolve(Collection::Lost, *id, db_path, output),
    }
}

fn report(args: &LostReportArgs, db_path: Option<&PathBuf>, output: Output) -> Result<()> {
    let mut board = open_board(db_path, output.mutation_view())?;

    let item = board.report_lost(LostReport {
        item_name: args.item_name.clone(),
        lost_date: args.date.clone(),
        location: args.location.clone(),
        description: args.description.clone(),
    })?;

    if output.silent {
        println!("{}", item.id);
    } else if output.mode == OutputMode::Json {
        println!("{}", serde_json::to_string(&item)?);
    } else if output.mode == OutputMode::Csv {
        TerminalView::stdout(OutputMode::Csv).render_lost(std::slice::from_ref(&item))?;
    }

    Ok(())
}

/// Resolve a record of either collection and print the outcome.
pub(crate) fn resolve(
    collection: Collection,
    id: i64,
    db_path: Option<&PathBuf>,
    output: Output,
) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument(format!(
            "item id must be a positive number, got {id}"
        )));
    }

    let mut board = open_board(db_path, output.mutation_view())?;

    let resolved = match board.resolve(collection, id)? {
        Resolution::Resolved => true,
        Resolution::Declined => false,
        Resolution::NotFound => return Err(Error::ItemNotFound { collection, id }),
    };

    if output.silent {
        if resolved {
            println!("{id}");
        }
    } else if output.mode == OutputMode::Json {
        let summary = ResolveOutput {
            id,
            collection,
            resolved,
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else if resolved {
        let action = match collection {
            Collection::Lost => "found",
            Collection::Found => "returned",
        };
        println!("Marked {collection} item {id} as {action}.");
    } else {
        println!("Cancelled; item {id} is still on the board.");
    }

    Ok(())
}
