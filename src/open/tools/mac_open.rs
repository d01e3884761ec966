//! macOS `open` URL opener.

use super::spawn_detached;
use crate::open::result::OpenMethod;
use crate::open::tool::{OpenTool, OpenToolError};

/// Opens URLs with `/usr/bin/open`.
pub struct MacOpen;

impl MacOpen {
    /// Create a new MacOpen tool.
    pub fn new() -> Self {
        Self
    }
}

impl OpenTool for MacOpen {
    fn method(&self) -> OpenMethod {
        OpenMethod::MacOpen
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_open(&self, url: &str) -> Result<(), OpenToolError> {
        spawn_detached("open", &[url])
    }
}

impl Default for MacOpen {
    fn default() -> Self {
        Self::new()
    }
}
