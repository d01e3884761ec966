//! Windows shell URL opener.

use super::spawn_detached;
use crate::open::result::OpenMethod;
use crate::open::tool::{OpenTool, OpenToolError};

/// Opens URLs with `cmd /C start`.
pub struct WindowsStart;

impl WindowsStart {
    /// Create a new WindowsStart tool.
    pub fn new() -> Self {
        Self
    }
}

impl OpenTool for WindowsStart {
    fn method(&self) -> OpenMethod {
        OpenMethod::WindowsStart
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn try_open(&self, url: &str) -> Result<(), OpenToolError> {
        // The empty string is the window title; without it `start` treats a
        // quoted URL as the title.
        spawn_detached("cmd", &["/C", "start", "", url])
    }
}

impl Default for WindowsStart {
    fn default() -> Self {
        Self::new()
    }
}
