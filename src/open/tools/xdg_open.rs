//! Linux freedesktop URL opener.

use super::{spawn_detached, tool_exists};
use crate::open::result::OpenMethod;
use crate::open::tool::{OpenTool, OpenToolError};

/// Opens URLs with `xdg-open`.
pub struct XdgOpen;

impl XdgOpen {
    /// Create a new XdgOpen tool.
    pub fn new() -> Self {
        Self
    }
}

impl OpenTool for XdgOpen {
    fn method(&self) -> OpenMethod {
        OpenMethod::XdgOpen
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xdg-open")
    }

    fn try_open(&self, url: &str) -> Result<(), OpenToolError> {
        spawn_detached("xdg-open", &[url])
    }
}

impl Default for XdgOpen {
    fn default() -> Self {
        Self::new()
    }
}
