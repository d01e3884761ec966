//! Output log of the shell.

use serde::Serialize;

use super::content::Content;

/// One entry in the output log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogLine {
    /// Echo of what the user typed, exactly as typed.
    Prompt { input: String },
    /// Output of a command.
    Response { content: Content },
}

/// Append-only sequence of log lines. `clear` is the only way to remove lines.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<LogLine>,
    scroll_requested: bool,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_prompt(&mut self, input: impl Into<String>) {
        self.lines.push(LogLine::Prompt {
            input: input.into(),
        });
    }

    /// Append a response and ask the view to scroll to the end.
    pub fn push_response(&mut self, content: Content) {
        self.lines.push(LogLine::Response { content });
        self.scroll_requested = true;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true once per response appended since the last call.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}
