//! Opener method identifiers.

/// Which system tool handled the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMethod {
    /// macOS LaunchServices
    MacOpen,
    /// Linux freedesktop
    XdgOpen,
    /// Linux GLib
    Gio,
    /// Windows shell
    WindowsStart,
}

impl OpenMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MacOpen => "open",
            Self::XdgOpen => "xdg-open",
            Self::Gio => "gio",
            Self::WindowsStart => "start",
        }
    }
}
