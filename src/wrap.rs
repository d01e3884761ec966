//! Soft wrapping by display width.
//!
//! Both the page layout and the TUI panes wrap through `row_starts`, so the
//! row counts used for scrolling and reveal ratios match what is drawn.

use unicode_width::UnicodeWidthChar;

/// Byte offsets at which each wrapped row of `text` starts.
///
/// The first entry is always 0. Rows break after the last whitespace that
/// fits; a word wider than `width` is split where it overflows. The break
/// whitespace stays at the end of its row, so slicing at the offsets loses
/// nothing. A `width` of 0 disables wrapping.
pub fn row_starts(text: &str, width: usize) -> Vec<usize> {
    let mut starts = vec![0];
    if width == 0 {
        return starts;
    }

    let mut row_start = 0;
    let mut row_width = 0;
    // Offset just past the last whitespace in the row, and the row width up to it.
    let mut last_break: Option<(usize, usize)> = None;

    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if row_width + w > width && idx > row_start {
            if let Some((at, used)) = last_break.take() {
                starts.push(at);
                row_start = at;
                row_width -= used;
            }
            if row_width + w > width && idx > row_start {
                starts.push(idx);
                row_start = idx;
                row_width = 0;
            }
        }
        row_width += w;
        if ch.is_whitespace() {
            last_break = Some((idx + ch.len_utf8(), row_width));
        }
    }
    starts
}

/// Number of rows `text` takes at `width`.
pub fn row_count(text: &str, width: usize) -> usize {
    row_starts(text, width).len()
}
