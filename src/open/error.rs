//! URL open errors.

/// Errors that can occur when handing a URL to the system.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Refusing to open '{target}': only http, https and mailto links are allowed")]
    InvalidTarget { target: String },

    #[error("No URL opener available. On Linux, install xdg-utils or glib (gio).")]
    NoToolAvailable,

    #[error("Opener '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },
}
