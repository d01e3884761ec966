//! Name banner with the typewriter role line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Cursor glyph drawn after the typed text.
pub const CURSOR: &str = "\u{258c}";

/// Three rows: name, typed role with cursor, rule.
pub struct Banner<'a> {
    name: &'a str,
    role: &'a str,
    cursor_visible: bool,
    theme: &'a Theme,
}

impl<'a> Banner<'a> {
    pub fn new(name: &'a str, role: &'a str, theme: &'a Theme) -> Self {
        Self {
            name,
            role,
            cursor_visible: true,
            theme,
        }
    }

    /// Show or hide the cursor (blink phase).
    pub fn cursor(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut role_line = vec![
            Span::styled("  > ", self.theme.text_secondary_style()),
            Span::styled(self.role.to_string(), self.theme.text_style()),
        ];
        if self.cursor_visible {
            role_line.push(Span::styled(CURSOR, self.theme.accent_style()));
        }

        let lines = vec![
            Line::from(Span::styled(
                format!("  {}", self.name),
                self.theme.accent_bold_style(),
            )),
            Line::from(role_line),
            Line::from(Span::styled(
                "\u{2500}".repeat(area.width as usize),
                self.theme.text_secondary_style(),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
