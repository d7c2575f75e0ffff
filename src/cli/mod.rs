//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable cards (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;

/// Lost & Found board - report, search and resolve lost and found items
#[derive(Parser, Debug)]
#[command(name = "lf", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ~/.lostfound/data/lostfound.db)
    #[arg(long, global = true, env = "LF_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Output only the record ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and human-readable error messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the board database
    Init {
        /// Overwrite an existing database (clears the board)
        #[arg(long)]
        force: bool,
    },

    /// Print version information
    Version,

    /// Show the board
    List {
        /// Which collection to show
        #[arg(value_enum, default_value_t)]
        scope: ListScope,
    },

    /// Lost items: report or mark as found
    Lost {
        #[command(subcommand)]
        command: LostCommands,
    },

    /// Found items: report or mark as returned
    Found {
        #[command(subcommand)]
        command: FoundCommands,
    },

    /// Search item names and locations in both collections
    Search {
        /// Search term (words are joined with spaces)
        #[arg(num_args = 0..)]
        term: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Which collections `lf list` shows.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListScope {
    #[default]
    All,
    Lost,
    Found,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ============================================================================
// Lost Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum LostCommands {
    /// Report a lost item
    Report(LostReportArgs),

    /// Mark a lost item as found (removes it from the board)
    Resolve {
        /// Item ID
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct LostReportArgs {
    /// What was lost
    pub item_name: String,

    /// Date it was lost (e.g. 2024-01-01)
    #[arg(short, long)]
    pub date: String,

    /// Where it was last seen
    #[arg(short, long)]
    pub location: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,
}

// ============================================================================
// Found Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum FoundCommands {
    /// Report a found item
    Report(FoundReportArgs),

    /// Mark a found item as returned (removes it from the board)
    Resolve {
        /// Item ID
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct FoundReportArgs {
    /// What was found
    pub item_name: String,

    /// Date it was found (e.g. 2024-01-02)
    #[arg(short, long)]
    pub date: String,

    /// Where it was found
    #[arg(short, long)]
    pub location: String,

    /// How the finder can be reached
    #[arg(short, long)]
    pub contact: String,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Photo to embed in the record
    #[arg(short, long)]
    pub image: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_found_report() {
        let cli = Cli::parse_from([
            "lf", "found", "report", "Keys", "--date", "2024-01-02", "--location", "Gym",
            "--contact", "555-0101", "--image", "keys.png",
        ]);
        let Commands::Found {
            command: FoundCommands::Report(args),
        } = cli.command
        else {
            panic!("expected found report");
        };
        assert_eq!(args.item_name, "Keys");
        assert_eq!(args.image, Some(PathBuf::from("keys.png")));
    }

    #[test]
    fn test_parse_search_words() {
        let cli = Cli::parse_from(["lf", "search", "red", "wallet"]);
        let Commands::Search { term } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(term.join(" "), "red wallet");
    }

    #[test]
    fn test_list_scope_defaults_to_all() {
        let cli = Cli::parse_from(["lf", "list"]);
        assert!(matches!(cli.command, Commands::List { scope: ListScope::All }));
    }
}
