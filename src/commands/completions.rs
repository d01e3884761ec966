//! Shell completion generation

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use folio::cli::Cli;

/// Print a completion script for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
