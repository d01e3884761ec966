//! Scrollable portfolio page.
//!
//! Sections the revealer has not released yet are drawn dimmed; revealed
//! sections use the normal text style.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{content_lines, wrap_lines};
use crate::page::Page;
use crate::reveal::Revealer;
use crate::theme::Theme;

pub struct PageView<'a> {
    page: &'a Page,
    revealer: &'a Revealer<usize>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, revealer: &'a Revealer<usize>, theme: &'a Theme) -> Self {
        Self {
            page,
            revealer,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
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

    /// All page rows wrapped to the page width, in page coordinates.
    fn page_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.page.total_rows());
        for (idx, section) in self.page.sections().iter().enumerate() {
            while lines.len() < section.start {
                lines.push(Line::default());
            }
            let style = if self.revealer.is_revealed(&idx) {
                self.theme.text_style()
            } else {
                self.theme.hidden_style()
            };
            lines.extend(wrap_lines(
                content_lines(&section.content, self.theme, style),
                self.page.width(),
            ));
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.accent_style()
        } else {
            Style::default().fg(self.theme.text_secondary)
        };
        let title = match self.page.total_rows() {
            0 => " Portfolio ".to_string(),
            total => {
                let shown = (self.page.offset() + self.page.viewport_rows()).min(total);
                format!(" Portfolio {}/{} ", shown, total)
            }
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title);

        let visible: Vec<Line<'static>> = self
            .page_lines()
            .into_iter()
            .skip(self.page.offset())
            .take(Self::viewport_rows(area))
            .collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::CommandTable;
    use ratatui::style::Modifier;

    fn setup(rows: usize) -> (Page, Revealer<usize>) {
        let mut page = Page::build(&CommandTable::builtin(), &["education", "about"]);
        page.set_viewport_rows(rows);
        let mut revealer = Revealer::default();
        for idx in 0..page.sections().len() {
            revealer.observe(idx);
        }
        (page, revealer)
    }

    #[test]
    fn unrevealed_sections_are_dimmed() {
        let (page, revealer) = setup(8);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        PageView::new(&page, &revealer, &theme).render(area, &mut buf);

        assert!(buf[(1, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn revealed_sections_use_text_style() {
        let (page, mut revealer) = setup(8);
        revealer.process(page.intersections());
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        PageView::new(&page, &revealer, &theme).render(area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "E");
        assert!(!buf[(1, 1)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(1, 1)].fg, theme.text_primary);
    }

    #[test]
    fn offset_skips_leading_rows() {
        let (mut page, revealer) = setup(3);
        page.scroll_by(1);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        PageView::new(&page, &revealer, &theme).render(area, &mut buf);

        // Second row of the education block is its underline.
        assert_eq!(buf[(1, 1)].symbol(), "\u{2500}");
    }

    #[test]
    fn viewport_excludes_border() {
        assert_eq!(PageView::viewport_rows(Rect::new(0, 0, 10, 10)), 8);
        assert_eq!(PageView::viewport_rows(Rect::new(0, 0, 10, 1)), 0);
    }

    #[test]
    fn wrapped_page_fits_the_pane() {
        let (mut page, mut revealer) = setup(30);
        let area = Rect::new(0, 0, 24, 32);
        page.set_width(PageView::viewport_width(area));
        revealer.process(page.intersections());
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        PageView::new(&page, &revealer, &theme).render(area, &mut buf);

        let text: String = (1..area.height - 1)
            .flat_map(|y| (1..area.width - 1).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        // Cut off after "Computer" without wrapping.
        assert!(text.contains("Science & Engineering"));
    }
}
