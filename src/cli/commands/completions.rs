//! Shell completions command implementation.

use crate::cli::{Cli, Shell};
use crate::error::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Write completions for `shell` to stdout.
pub fn execute(shell: &Shell) -> Result<()> {
    let target = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(target, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
