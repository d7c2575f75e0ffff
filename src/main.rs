//! Lost & Found CLI entry point.

use clap::Parser;
use lf::cli::commands::{self, Output};
use lf::cli::{Cli, Commands, OutputFormat};
use lf::error::Error;
use lf::render::OutputMode;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.silent {
        lf::SILENT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.format == OutputFormat::Csv {
        lf::CSV_OUTPUT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    // Resolve effective JSON mode: --json OR --format json OR non-TTY stdout
    let json = cli.json
        || cli.format == OutputFormat::Json
        || (cli.format == OutputFormat::Table
            && !std::io::IsTerminal::is_terminal(&std::io::stdout()));

    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,rusqlite=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    let mode = if lf::is_csv() {
        OutputMode::Csv
    } else if json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let output = Output {
        mode,
        silent: lf::is_silent(),
        assume_yes: cli.yes,
    };

    match &cli.command {
        Commands::Init { force } => commands::init::execute(cli.db.as_ref(), *force, json),
        Commands::Version => commands::version::execute(cli.db.as_ref(), json),

        // Home view
        Commands::List { scope } => commands::list::execute(*scope, cli.db.as_ref(), output),

        // Reports and resolves
        Commands::Lost { command } => commands::lost::execute(command, cli.db.as_ref(), output),
        Commands::Found { command } => commands::found::execute(command, cli.db.as_ref(), output),

        Commands::Search { term } => commands::search::execute(term, cli.db.as_ref(), output),

        // Shell completions
        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}
