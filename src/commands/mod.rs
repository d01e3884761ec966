//! Subcommand handlers for the folio binary.

pub mod completions;
pub mod config;
pub mod exec;
pub mod list;
pub mod shell;

/// Whether stdout should get ANSI colors.
///
/// Off when stdout is not a terminal or `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}
