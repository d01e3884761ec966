//! folio binary entry point.

mod commands;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands};
use folio::config::LogConfig;
use folio::logging::{self, LogTarget};
use folio::Config;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let config = Config::load_from(&config_path)?;
            if let Some(target) = logging::tui_target(&config.log) {
                logging::init(&config.log, target);
            }
            commands::shell::handle(&config)
        }
        Commands::Exec {
            format,
            open,
            commands,
        } => {
            let config = load_for_cli(&config_path)?;
            commands::exec::handle(&config, format, open, commands)
        }
        Commands::Commands => {
            logging::init(&LogConfig::default(), LogTarget::Stderr);
            commands::list::handle()
        }
        Commands::Config { action } => {
            logging::init(&LogConfig::default(), LogTarget::Stderr);
            commands::config::handle(action, &config_path)
        }
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Load config and send logs to stderr.
fn load_for_cli(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    logging::init(&config.log, LogTarget::Stderr);
    Ok(config)
}
