//! Shell pane: output log followed by the input line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::banner::CURSOR;
use super::{content_lines, wrap_lines};
use crate::shell::{LogLine, Shell};
use crate::theme::Theme;

pub struct TerminalView<'a> {
    shell: &'a Shell,
    prompt: &'a str,
    theme: &'a Theme,
    focused: bool,
    /// Rows scrolled up from the bottom.
    scroll: usize,
}

impl<'a> TerminalView<'a> {
    pub fn new(shell: &'a Shell, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            shell,
            prompt,
            theme,
            focused: false,
            scroll: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn scroll(mut self, rows_from_bottom: usize) -> Self {
        self.scroll = rows_from_bottom;
        self
    }

    /// Rows available for content inside the border.
    pub fn viewport_rows(area: Rect) -> usize {
        area.height.saturating_sub(2) as usize
    }

    /// Columns available for content inside the border.
    pub fn viewport_width(area: Rect) -> usize {
        area.width.saturating_sub(2) as usize
    }

    fn prompt_line(&self, input: &str, cursor: bool) -> Line<'static> {
        let mut spans = vec![
            Span::styled(self.prompt.to_string(), self.theme.accent_bold_style()),
            Span::styled(format!(" {}", input), self.theme.text_style()),
        ];
        if cursor {
            spans.push(Span::styled(CURSOR, self.theme.accent_style()));
        }
        Line::from(spans)
    }

    /// Every row of the pane wrapped to `width`, oldest first, ending with
    /// the input line.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for line in self.shell.log().lines() {
            match line {
                LogLine::Prompt { input } => lines.push(self.prompt_line(input, false)),
                LogLine::Response { content } => {
                    lines.extend(content_lines(content, self.theme, self.theme.text_style()))
                }
            }
        }
        lines.push(self.prompt_line(self.shell.input(), self.focused));
        wrap_lines(lines, width)
    }
}

/// Largest valid scroll-back for `total` rows in a viewport of `rows`.
pub fn max_scroll(total: usize, rows: usize) -> usize {
    total.saturating_sub(rows)
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.accent_style()
        } else {
            Style::default().fg(self.theme.text_secondary)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Terminal ");

        let lines = self.lines(Self::viewport_width(area));
        let rows = Self::viewport_rows(area);
        let scroll = self.scroll.min(max_scroll(lines.len(), rows));
        let start = lines.len().saturating_sub(rows + scroll);
        let visible: Vec<Line<'static>> = lines.into_iter().skip(start).take(rows).collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}
