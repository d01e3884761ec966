//! Command history with arrow-key recall.

/// Outcome of stepping forward through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Cursor moved onto this entry.
    Entry(&'a str),
    /// Cursor is one past the end: the input should be an empty draft.
    Draft,
}

/// Append-only list of submitted commands plus a recall cursor.
///
/// The cursor always satisfies `0 <= cursor <= len`, where `len` means "no
/// entry selected".
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and reset the cursor past the end.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    /// Step back one entry (arrow up). `None` when already at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry (arrow down).
    pub fn next(&mut self) -> Recall<'_> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Recall::Entry(&self.entries[self.cursor])
        } else {
            self.cursor = self.entries.len();
            Recall::Draft
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
