//! Terminal lifecycle for the TUI.
//!
//! `App` owns the ratatui terminal: raw mode, the alternate screen and mouse
//! capture are enabled on creation and restored on drop, so an early return or
//! an error never leaves the user's terminal in a broken state.

pub mod layout;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Full-screen terminal session.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Upper bound on how long `next_event` blocks.
    tick_rate: Duration,
    restored: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
            restored: false,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait for the next input event, at most `min(timeout, tick_rate)`.
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout.min(self.tick_rate))? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Leave the alternate screen and raw mode.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
