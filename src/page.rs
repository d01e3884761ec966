//! Scrollable portfolio page.
//!
//! The page is the canned content of a fixed set of commands stacked
//! vertically. Each block is a section that the revealer observes.

use crate::reveal::{intersection_ratio, Intersection};
use crate::shell::{CommandTable, Content, Response};

/// Commands whose output makes up the page, top to bottom.
pub const PAGE_COMMANDS: &[&str] = &[
    "about",
    "experience",
    "projects",
    "skills",
    "certifications",
    "por",
    "awards",
    "education",
    "contact",
    "socials",
];

/// One block of the page.
#[derive(Debug, Clone)]
pub struct Section {
    pub command: &'static str,
    pub content: Content,
    /// First row of the section in page coordinates
    pub start: usize,
    /// Number of rows the section occupies
    pub rows: usize,
}

/// Rows between sections.
const SECTION_GAP: usize = 1;

/// The page layout plus its scroll position.
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<Section>,
    total_rows: usize,
    offset: usize,
    viewport_rows: usize,
    /// Wrap width in columns; 0 means unwrapped.
    width: usize,
}

impl Page {
    /// Lay out the page from the print responses of `commands`.
    ///
    /// Commands that do not print (unknown names, `clear`, `resume`) are skipped.
    pub fn build(table: &CommandTable, commands: &[&'static str]) -> Self {
        let sections = commands
            .iter()
            .filter_map(|&command| match table.resolve(command) {
                Some(Response::Print { content }) => Some(Section {
                    command,
                    content,
                    start: 0,
                    rows: 0,
                }),
                _ => None,
            })
            .collect();

        let mut page = Self {
            sections,
            total_rows: 0,
            offset: 0,
            viewport_rows: 0,
            width: 0,
        };
        page.layout();
        page
    }

    /// Recompute section rows for the current width.
    fn layout(&mut self) {
        let mut row = 0;
        for (idx, section) in self.sections.iter_mut().enumerate() {
            if idx > 0 {
                row += SECTION_GAP;
            }
            section.start = row;
            section.rows = section.content.wrapped_rows(self.width);
            row += section.rows;
        }
        self.total_rows = row;
        self.offset = self.offset.min(self.max_offset());
    }

    /// The standard portfolio page.
    pub fn portfolio(table: &CommandTable) -> Self {
        Self::build(table, PAGE_COMMANDS)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.viewport_rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Wrap the page to `width` columns, keeping the offset in range.
    pub fn set_width(&mut self, width: usize) {
        if width != self.width {
            self.width = width;
            self.layout();
        }
    }

    /// Update the viewport height, keeping the offset in range.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = target.min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.viewport_rows.max(1) as isize));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.viewport_rows.max(1) as isize);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Current intersection of every section with the viewport.
    pub fn intersections(&self) -> Vec<Intersection<usize>> {
        self.sections
            .iter()
            .enumerate()
            .map(|(idx, s)| Intersection {
                target: idx,
                ratio: intersection_ratio(s.start, s.rows, self.offset, self.viewport_rows),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(viewport: usize) -> Page {
        let mut p = Page::portfolio(&CommandTable::builtin());
        p.set_viewport_rows(viewport);
        p
    }

    #[test]
    fn portfolio_has_a_section_per_command() {
        let p = page(10);
        let names: Vec<_> = p.sections().iter().map(|s| s.command).collect();
        assert_eq!(names, PAGE_COMMANDS);
    }

    #[test]
    fn sections_are_laid_out_back_to_back_with_gaps() {
        let p = page(10);
        let s = p.sections();
        for pair in s.windows(2) {
            assert_eq!(pair[1].start, pair[0].start + pair[0].rows + SECTION_GAP);
        }
        let last = s.last().unwrap();
        assert_eq!(p.total_rows(), last.start + last.rows);
    }

    #[test]
    fn non_printing_commands_are_skipped() {
        let p = Page::build(&CommandTable::builtin(), &["about", "clear", "resume", "nope"]);
        assert_eq!(p.sections().len(), 1);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut p = page(10);
        p.scroll_by(-5);
        assert_eq!(p.offset(), 0);
        p.scroll_by(isize::MAX);
        assert_eq!(p.offset(), p.total_rows() - 10);
        p.scroll_to_top();
        p.page_down();
        assert_eq!(p.offset(), 10);
        p.page_up();
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn growing_viewport_pulls_offset_back() {
        let mut p = page(10);
        p.scroll_to_bottom();
        p.set_viewport_rows(p.total_rows() + 5);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn first_section_is_visible_at_top() {
        let p = page(10);
        let hits = p.intersections();
        assert!(hits[0].ratio > 0.0);
        assert_eq!(hits.last().unwrap().ratio, 0.0);
    }

    #[test]
    fn zero_height_viewport_sees_nothing() {
        let p = page(0);
        assert!(p.intersections().iter().all(|i| i.ratio == 0.0));
    }

    #[test]
    fn narrow_width_adds_wrapped_rows() {
        let mut p = page(10);
        let unwrapped = p.total_rows();
        let about_rows = p.sections()[0].rows;

        p.set_width(20);
        assert!(p.total_rows() > unwrapped);
        assert!(p.sections()[0].rows > about_rows);
        let s = p.sections();
        for pair in s.windows(2) {
            assert_eq!(pair[1].start, pair[0].start + pair[0].rows + SECTION_GAP);
        }

        p.set_width(0);
        assert_eq!(p.total_rows(), unwrapped);
    }

    #[test]
    fn rewrapping_wider_clamps_offset() {
        let mut p = page(10);
        p.set_width(20);
        p.scroll_to_bottom();
        p.set_width(200);
        assert_eq!(p.offset(), p.total_rows() - 10);
    }
}
