//! `tracing` subscriber setup.
//!
//! The TUI owns the screen, so it logs to a file. CLI commands log to stderr.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides `log.level`.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default TUI log file: `<data_local_dir>/folio/folio.log`.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio").join("folio.log"))
}

/// Build the filter from `FOLIO_LOG`, then `level`, then `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &LogConfig, target: LogTarget) {
    let filter = env_filter(&config.level);

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => match open_log_file(&path) {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init(),
            // No terminal to report to once the TUI is up; run without logs.
            Err(_) => return,
        },
    };
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}

/// Pick the TUI log target from config.
pub fn tui_target(config: &LogConfig) -> Option<LogTarget> {
    config
        .file
        .clone()
        .or_else(default_log_file)
        .map(LogTarget::File)
}
