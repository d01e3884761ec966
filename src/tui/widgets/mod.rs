//! TUI widgets for folio
//!
//! Reusable UI components for the terminal interface.

pub mod banner;
pub mod page_view;
pub mod terminal;

pub use banner::Banner;
pub use page_view::PageView;
pub use terminal::TerminalView;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::shell::{Content, Piece};
use crate::theme::Theme;
use crate::wrap::row_starts;

/// Convert response content to styled lines.
///
/// Text and user input use `base`; links use the theme's link style so they
/// stand out even though the terminal cannot follow them.
pub fn content_lines(content: &Content, theme: &Theme, base: Style) -> Vec<Line<'static>> {
    content
        .lines()
        .into_iter()
        .map(|pieces| {
            let spans: Vec<Span<'static>> = pieces
                .into_iter()
                .map(|piece| match piece {
                    Piece::Link { label, .. } => {
                        Span::styled(label.to_string(), base.patch(theme.link_style()))
                    }
                    other => Span::styled(other.text().to_string(), base),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Split a styled line into rows of at most `width` columns.
///
/// Styles carry over to every row a span lands on. A `width` of 0 leaves the
/// line whole.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    let starts = row_starts(&text, width);
    if starts.len() == 1 {
        return vec![line];
    }

    let mut rows: Vec<Line<'static>> = starts
        .iter()
        .map(|_| Line::default().style(line.style))
        .collect();
    let mut offset = 0;
    for span in &line.spans {
        let end = offset + span.content.len();
        let mut pos = offset;
        while pos < end {
            let row = starts.partition_point(|&s| s <= pos) - 1;
            let row_end = starts.get(row + 1).map_or(end, |&next| next.min(end));
            rows[row]
                .spans
                .push(Span::styled(text[pos..row_end].to_string(), span.style));
            pos = row_end;
        }
        offset = end;
    }
    rows
}

/// Wrap every line to `width` columns.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}
