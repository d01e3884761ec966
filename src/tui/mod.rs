//! TUI (Text User Interface) module for folio
//!
//! Full-screen terminal UI built on ratatui/crossterm: the typewriter banner,
//! the fade-in portfolio page and the command shell.

pub mod app;
pub mod portfolio_app;
pub mod widgets;

pub use app::App;
pub use portfolio_app::{run, Focus, Portfolio, PortfolioApp};
