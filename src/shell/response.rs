//! Command responses and the effects they request.

use std::borrow::Cow;

use serde::Serialize;

use super::content::Content;

/// What a command asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Append one response line.
    Print { content: Content },
    /// Append a notice and ask the host to open `url` in a new browsing context.
    Open {
        notice: Content,
        url: Cow<'static, str>,
    },
    /// Truncate the output log.
    Clear,
}

impl Response {
    pub fn print(content: Content) -> Self {
        Self::Print { content }
    }
}

/// Side effect returned to the layer hosting the shell.
///
/// The shell never touches the environment itself; the TUI or CLI decides
/// whether and how an effect is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Effect {
    OpenUrl(String),
}
