//! Open URLs in the desktop's default browser or mail client.
//!
//! Platform tools are tried in order:
//! - macOS: `open`
//! - Linux: `xdg-open`, then `gio open`
//! - Windows: `cmd /C start`

mod error;
mod opener;
mod result;
mod tool;
pub mod tools;

pub use error::OpenError;
pub use opener::{validate_target, Opener};
pub use result::OpenMethod;
pub use tool::{OpenTool, OpenToolError};
