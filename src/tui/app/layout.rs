//! Screen layout for the portfolio TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the banner: name, role line, rule.
pub const BANNER_HEIGHT: u16 = 3;

/// Below this height the banner is dropped to leave room for the body.
pub const MIN_HEIGHT_FOR_BANNER: u16 = 12;

/// Below this width the page and shell are stacked instead of side by side.
pub const MIN_WIDTH_FOR_SPLIT: u16 = 80;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortfolioLayout {
    pub banner: Option<Rect>,
    pub page: Rect,
    pub shell: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Banner on top, page and shell in the middle, status and footer rows last.
pub fn build_portfolio_layout(area: Rect) -> PortfolioLayout {
    let show_banner = area.height >= MIN_HEIGHT_FOR_BANNER;
    let banner_rows = if show_banner { BANNER_HEIGHT } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_rows),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let body = if area.width >= MIN_WIDTH_FOR_SPLIT {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1])
    };

    PortfolioLayout {
        banner: show_banner.then_some(rows[0]),
        page: body[0],
        shell: body[1],
        status: rows[2],
        footer: rows[3],
    }
}

/// Whether `(column, row)` falls inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
