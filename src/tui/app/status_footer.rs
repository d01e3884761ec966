//! Status line and footer rendering.
//!
//! The status line shows the latest outcome message (link opened, opener
//! failure) or the focus hint; the footer shows key hints for the focused pane.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Render a status line with the given text.
///
/// Displays the text in the secondary text color of the theme.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string()).style(theme.text_secondary_style());
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("q", "quit"), ("Tab", "complete")]` renders as `"q: quit | Tab: complete"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_spans_alternate_key_and_description() {
        let theme = Theme::default();
        let spans = build_footer_spans(&[("q", "quit"), ("Tab", "complete")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "q: quit | Tab: complete");
        assert_eq!(spans[0].style, theme.accent_style());
        assert_eq!(spans[1].style, theme.text_secondary_style());
    }

    #[test]
    fn empty_keys_render_nothing() {
        assert!(build_footer_spans(&[], &Theme::default()).is_empty());
    }
}
