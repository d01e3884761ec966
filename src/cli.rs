//! Command-line interface definition.
//!
//! Lives in the library so the xtask crate can render a man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Version string: package version, git revision (dev builds) and build date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FOLIO_BUILD_DATE"),
    ")"
);

/// Terminal portfolio: a typewriter banner, a fade-in page and a canned
/// command shell.
#[derive(Debug, Parser)]
#[command(name = "folio", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to $FOLIO_CONFIG or the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive portfolio (default)
    Shell,

    /// Run shell commands without the TUI and print the transcript
    Exec {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Open links requested by commands such as `resume`
        #[arg(long)]
        open: bool,

        /// Commands to run; read one per line from stdin when omitted
        #[arg(value_name = "COMMAND")]
        commands: Vec<String>,
    },

    /// List available shell commands
    Commands,

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default config file if none exists
    Init,
}

/// Transcript format for `exec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}
