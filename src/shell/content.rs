//! Structured response content.
//!
//! Commands never produce markup. They produce a `Content`: a flat list of
//! segments that renderers (HTML, plain text, TUI) turn into their own
//! representation. Only `Segment::Input` carries user-supplied text, and every
//! renderer must treat it as untrusted.

use std::borrow::Cow;

use serde::Serialize;

/// One run of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Trusted text authored with the program.
    Text { text: Cow<'static, str> },
    /// A hyperlink with a visible label.
    Link {
        label: Cow<'static, str>,
        href: Cow<'static, str>,
    },
    /// Text that came from the user and must be escaped on output.
    Input { text: String },
}

/// A block of response content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Content {
    /// Whether whitespace and line breaks are significant (`<pre>` in HTML).
    pub preformatted: bool,
    pub segments: Vec<Segment>,
}

/// Borrowed view of a segment fragment that lies on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Link { label: &'a str, href: &'a str },
    Input(&'a str),
}

impl<'a> Piece<'a> {
    /// Visible text of this piece.
    pub fn text(&self) -> &'a str {
        match self {
            Piece::Text(t) | Piece::Input(t) => t,
            Piece::Link { label, .. } => label,
        }
    }
}

impl Content {
    /// Start a preformatted block.
    pub fn pre() -> Self {
        Self {
            preformatted: true,
            segments: Vec::new(),
        }
    }

    /// Start a single-paragraph block.
    pub fn inline() -> Self {
        Self::default()
    }

    /// Append trusted text.
    pub fn text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.segments.push(Segment::Text { text: text.into() });
        self
    }

    /// Append a link.
    pub fn link(
        mut self,
        label: impl Into<Cow<'static, str>>,
        href: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.segments.push(Segment::Link {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    /// Append user-supplied text.
    pub fn input(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Input { text: text.into() });
        self
    }

    /// Concatenated visible text (link labels, no markup).
    pub fn to_plain(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text { text } => text.as_ref(),
                Segment::Link { label, .. } => label.as_ref(),
                Segment::Input { text } => text.as_str(),
            })
            .collect()
    }

    /// Rows this content takes when each line is wrapped to `width` columns.
    pub fn wrapped_rows(&self, width: usize) -> usize {
        self.lines()
            .iter()
            .map(|pieces| {
                let text: String = pieces.iter().map(Piece::text).collect();
                crate::wrap::row_count(&text, width)
            })
            .sum()
    }

    /// Split into display lines.
    ///
    /// Links never span lines, text segments are split on `\n`. A single
    /// trailing line break does not produce an empty last line, matching how
    /// `<pre>` blocks render.
    pub fn lines(&self) -> Vec<Vec<Piece<'_>>> {
        let mut lines: Vec<Vec<Piece<'_>>> = vec![Vec::new()];

        for segment in &self.segments {
            match segment {
                Segment::Link { label, href } => {
                    if let Some(line) = lines.last_mut() {
                        line.push(Piece::Link {
                            label: label.as_ref(),
                            href: href.as_ref(),
                        });
                    }
                }
                Segment::Text { text } => push_split(&mut lines, text, Piece::Text),
                Segment::Input { text } => push_split(&mut lines, text, Piece::Input),
            }
        }

        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }
}

fn push_split<'a>(lines: &mut Vec<Vec<Piece<'a>>>, text: &'a str, make: fn(&'a str) -> Piece<'a>) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Vec::new());
        }
        if !part.is_empty() {
            if let Some(line) = lines.last_mut() {
                line.push(make(part));
            }
        }
    }
}
