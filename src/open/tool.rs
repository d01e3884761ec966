//! OpenTool trait and related error types.

use super::result::OpenMethod;

/// A tool that can hand a URL to the desktop's default handler.
pub trait OpenTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> OpenMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Launch the handler for `url` without waiting for it to exit.
    fn try_open(&self, url: &str) -> Result<(), OpenToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}
