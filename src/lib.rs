//! folio: a terminal portfolio.
//!
//! The library holds everything that does not need a terminal: the command
//! shell, the typewriter animation, the visibility revealer, the page model,
//! renderers and config. The `tui` module puts them on screen.

pub mod cli;
pub mod config;
pub mod logging;
pub mod open;
pub mod page;
pub mod render;
pub mod reveal;
pub mod schedule;
pub mod shell;
pub mod theme;
pub mod tui;
pub mod typewriter;
pub mod wrap;

pub use config::Config;
pub use shell::{Effect, Shell};
pub use theme::Theme;
