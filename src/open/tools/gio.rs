//! Linux GLib URL opener.

use super::{spawn_detached, tool_exists};
use crate::open::result::OpenMethod;
use crate::open::tool::{OpenTool, OpenToolError};

/// Opens URLs with `gio open`. Fallback for desktops without xdg-utils.
pub struct Gio;

impl Gio {
    /// Create a new Gio tool.
    pub fn new() -> Self {
        Self
    }
}

impl OpenTool for Gio {
    fn method(&self) -> OpenMethod {
        OpenMethod::Gio
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("gio")
    }

    fn try_open(&self, url: &str) -> Result<(), OpenToolError> {
        spawn_detached("gio", &["open", url])
    }
}

impl Default for Gio {
    fn default() -> Self {
        Self::new()
    }
}
