//! Interactive portfolio TUI application
//!
//! Banner with the typewriter role line, the fade-in portfolio page and the
//! command shell side by side. `Portfolio` holds all state and is driven by
//! plain method calls so it can be tested against ratatui's `TestBackend`;
//! `PortfolioApp` wires it to a real terminal.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};

use super::app::layout::{build_portfolio_layout, contains, PortfolioLayout};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::widgets::terminal::max_scroll;
use super::widgets::{Banner, PageView, TerminalView};
use crate::config::Config;
use crate::open::Opener;
use crate::page::Page;
use crate::reveal::Revealer;
use crate::schedule::ScheduledTask;
use crate::shell::{profile, Effect, Shell};
use crate::theme::Theme;
use crate::typewriter::Typewriter;

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

/// Half period of the banner cursor blink.
const BLINK: Duration = Duration::from_millis(530);

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Shell,
    Page,
}

/// Portfolio state.
pub struct Portfolio {
    shell: Shell,
    prompt: String,
    theme: Theme,
    banner: ScheduledTask<Typewriter>,
    /// Whether the banner animates at all.
    animate: bool,
    /// Role shown when animation is off.
    static_role: String,
    page: Page,
    revealer: Revealer<usize>,
    focus: Focus,
    /// Shell pane rows scrolled up from the bottom.
    output_scroll: usize,
    /// Shell pane rows from the last frame.
    output_rows: usize,
    /// Shell pane columns from the last frame.
    output_width: usize,
    status_message: Option<String>,
    opener: Opener,
    layout: Option<PortfolioLayout>,
    started: Instant,
    now: Instant,
    should_quit: bool,
}

impl Portfolio {
    pub fn new(config: &Config, opener: Opener, now: Instant) -> Self {
        let typewriter = Typewriter::new(
            config.typewriter.roles.iter().cloned(),
            config.typewriter.timing(),
        );
        let static_role = typewriter.roles().first().cloned().unwrap_or_default();
        let animate = config.typewriter.enabled;
        let banner = if animate {
            ScheduledTask::start(typewriter, now)
        } else {
            ScheduledTask::idle(typewriter)
        };

        let shell = Shell::new();
        let page = Page::portfolio(shell.table());
        let mut revealer = Revealer::new(config.reveal.threshold);
        for idx in 0..page.sections().len() {
            revealer.observe(idx);
        }

        Self {
            shell,
            prompt: config.shell.prompt.clone(),
            theme: config.ui.theme(),
            banner,
            animate,
            static_role,
            page,
            revealer,
            focus: Focus::Shell,
            output_scroll: 0,
            output_rows: 0,
            output_width: 0,
            status_message: None,
            opener,
            layout: None,
            started: now,
            now,
            should_quit: false,
        }
    }

    /// Submit each startup command as if typed.
    pub fn run_startup<S: AsRef<str>>(&mut self, commands: &[S]) {
        for command in commands {
            let effect = self.shell.submit(command.as_ref());
            self.after_submit(effect);
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn revealer(&self) -> &Revealer<usize> {
        &self.revealer
    }

    pub fn banner(&self) -> &ScheduledTask<Typewriter> {
        &self.banner
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn output_scroll(&self) -> usize {
        self.output_scroll
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Role text currently shown in the banner.
    pub fn role_text(&self) -> &str {
        if self.animate {
            self.banner.task().text()
        } else {
            &self.static_role
        }
    }

    // --- Timing ---

    /// Advance animations and reveal whatever the viewport now shows.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.sync_banner(now);
        if self.banner.poll(now) {
            tracing::trace!(role = self.banner.task().text(), "banner step");
        }
        let revealed = self.revealer.process(self.page.intersections());
        for idx in revealed {
            if let Some(section) = self.page.sections().get(idx) {
                tracing::debug!(section = section.command, "section revealed");
            }
        }
    }

    /// Pause the animation while the banner is off screen.
    fn sync_banner(&mut self, now: Instant) {
        if !self.animate || self.banner.task().roles().is_empty() {
            return;
        }
        let visible = self.layout.map_or(true, |l| l.banner.is_some());
        if visible && !self.banner.is_running() {
            tracing::debug!("banner visible, resuming animation");
            self.banner.resume(now);
        } else if !visible && self.banner.is_running() {
            tracing::debug!("banner hidden, pausing animation");
            self.banner.cancel();
        }
    }

    /// How long the event loop may block before the next tick is needed.
    pub fn next_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        self.banner
            .time_until_due(now)
            .map_or(tick_rate, |due| due.min(tick_rate))
    }

    // --- Input ---

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.focus {
            Focus::Shell => self.handle_shell_key(key),
            Focus::Page => self.handle_page_key(key),
        }
    }

    fn handle_shell_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                self.status_message = None;
                let effect = self.shell.submit_input();
                self.after_submit(effect);
            }
            KeyCode::Up => self.shell.recall_previous(),
            KeyCode::Down => self.shell.recall_next(),
            KeyCode::Tab => {
                self.shell.auto_complete_input();
                self.follow_output();
            }
            KeyCode::Backspace => self.shell.pop_char(),
            KeyCode::PageUp => self.scroll_output_up(self.output_rows.max(1)),
            KeyCode::PageDown => self.scroll_output_down(self.output_rows.max(1)),
            KeyCode::Esc => self.focus = Focus::Page,
            KeyCode::Char('u') if ctrl => self.shell.clear_input(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.shell.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.page.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.page.scroll_by(1),
            KeyCode::PageUp => self.page.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.page.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.page.scroll_to_bottom(),
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc => {
                self.focus = Focus::Shell
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.layout else {
            return;
        };
        let over_page = contains(layout.page, mouse.column, mouse.row);
        let over_shell = contains(layout.shell, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if over_page => self.focus = Focus::Page,
            MouseEventKind::Down(MouseButton::Left) if over_shell => self.focus = Focus::Shell,
            MouseEventKind::ScrollUp if over_page => self.page.scroll_by(-(WHEEL_ROWS as isize)),
            MouseEventKind::ScrollDown if over_page => self.page.scroll_by(WHEEL_ROWS as isize),
            MouseEventKind::ScrollUp if over_shell => self.scroll_output_up(WHEEL_ROWS),
            MouseEventKind::ScrollDown if over_shell => self.scroll_output_down(WHEEL_ROWS),
            _ => {}
        }
    }

    fn after_submit(&mut self, effect: Option<Effect>) {
        if let Some(effect) = effect {
            self.apply_effect(&effect);
        }
        self.follow_output();
    }

    /// Jump to the newest output if the shell asked for it.
    fn follow_output(&mut self) {
        if self.shell.log_mut().take_scroll_request() {
            self.output_scroll = 0;
        }
    }

    fn apply_effect(&mut self, effect: &Effect) {
        let Effect::OpenUrl(url) = effect;
        self.status_message = Some(match self.opener.apply(effect) {
            Ok(method) => format!("Opened {} with {}", url, method.name()),
            Err(e) => {
                tracing::warn!(error = %e, "could not open link");
                format!("Could not open link: {}", e)
            }
        });
    }

    fn output_total_rows(&self) -> usize {
        TerminalView::new(&self.shell, &self.prompt, &self.theme)
            .lines(self.output_width)
            .len()
    }

    fn scroll_output_up(&mut self, rows: usize) {
        let max = max_scroll(self.output_total_rows(), self.output_rows);
        self.output_scroll = self.output_scroll.saturating_add(rows).min(max);
    }

    fn scroll_output_down(&mut self, rows: usize) {
        self.output_scroll = self.output_scroll.saturating_sub(rows);
    }

    // --- Rendering ---

    /// Recompute the layout for a frame area and resize the scroll views.
    pub fn resize(&mut self, area: Rect) {
        let layout = build_portfolio_layout(area);
        self.page.set_width(PageView::viewport_width(layout.page));
        self.page.set_viewport_rows(PageView::viewport_rows(layout.page));
        self.output_rows = TerminalView::viewport_rows(layout.shell);
        self.output_width = TerminalView::viewport_width(layout.shell);
        self.layout = Some(layout);
    }

    fn status_text(&self) -> String {
        if let Some(msg) = &self.status_message {
            return msg.clone();
        }
        let total = self.page.sections().len();
        let hidden = self
            .page
            .sections()
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.revealer.is_revealed(idx))
            .count();
        match self.focus {
            Focus::Shell => "Type 'help' for available commands".to_string(),
            Focus::Page => format!("{} of {} sections seen", total - hidden, total),
        }
    }

    fn footer_keys(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Shell => &[
                ("Enter", "run"),
                ("\u{2191}\u{2193}", "history"),
                ("Tab", "complete"),
                ("PgUp/PgDn", "scroll"),
                ("Esc", "page"),
                ("Ctrl+C", "quit"),
            ],
            Focus::Page => &[
                ("\u{2191}\u{2193}/jk", "scroll"),
                ("PgUp/PgDn", "page"),
                ("Home/End", "jump"),
                ("Enter", "shell"),
                ("q", "quit"),
            ],
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.resize(frame.area());
        let Some(layout) = self.layout else {
            return;
        };

        if let Some(area) = layout.banner {
            let blink_on = (self.now.saturating_duration_since(self.started).as_millis()
                / BLINK.as_millis())
                % 2
                == 0;
            frame.render_widget(
                Banner::new(profile::NAME, self.role_text(), &self.theme).cursor(blink_on),
                area,
            );
        }

        frame.render_widget(
            PageView::new(&self.page, &self.revealer, &self.theme)
                .focused(self.focus == Focus::Page),
            layout.page,
        );
        frame.render_widget(
            TerminalView::new(&self.shell, &self.prompt, &self.theme)
                .focused(self.focus == Focus::Shell)
                .scroll(self.output_scroll),
            layout.shell,
        );

        render_status_line(frame, layout.status, &self.status_text(), &self.theme);
        render_footer(frame, layout.footer, self.footer_keys(), &self.theme);
    }
}

/// Portfolio bound to the real terminal.
pub struct PortfolioApp {
    app: App,
    portfolio: Portfolio,
}

impl PortfolioApp {
    pub fn new(config: &Config) -> Result<Self> {
        let mut portfolio = Portfolio::new(config, Opener::new(), Instant::now());
        portfolio.run_startup(&config.shell.startup);
        let app = App::new(config.ui.tick_rate())?;
        Ok(Self { app, portfolio })
    }

    /// Event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("portfolio started");
        loop {
            self.portfolio.tick(Instant::now());

            let portfolio = &mut self.portfolio;
            self.app.draw(|frame| portfolio.render(frame))?;

            if self.portfolio.should_quit() {
                break;
            }

            let timeout = self
                .portfolio
                .next_timeout(Instant::now(), self.app.tick_rate());
            if let Some(event) = self.app.next_event(timeout)? {
                self.portfolio.handle_event(event);
            }
        }
        tracing::info!("portfolio closed");
        self.app.restore()
    }
}

/// Run the interactive portfolio.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config) -> Result<()> {
    PortfolioApp::new(config)?.run()
}
