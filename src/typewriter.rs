//! Typewriter role animation.
//!
//! Cycles through an ordered list of strings: type one character per tick,
//! hold the full string, delete one character per tick, hold the empty string,
//! move on to the next string, and wrap around forever.

use std::time::Duration;

use crate::schedule::Step;

/// Pacing of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between revealed characters
    pub type_delay: Duration,
    /// Delay between removed characters
    pub delete_delay: Duration,
    /// Hold time once the full string is shown
    pub pause_full: Duration,
    /// Hold time once the string is fully deleted
    pub pause_empty: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(80),
            delete_delay: Duration::from_millis(40),
            pause_full: Duration::from_millis(2000),
            pause_empty: Duration::from_millis(500),
        }
    }
}

/// Where the animation is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// The role cycle and its cursor.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: Timing,
    role: usize,
    /// Visible characters of the current role (chars, not bytes)
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Empty strings are dropped; they have nothing to type.
    pub fn new<I, S>(roles: I, timing: Timing) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(Into::into)
            .filter(|r: &String| !r.is_empty())
            .collect();
        Self {
            roles,
            timing,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Currently displayed text.
    pub fn text(&self) -> &str {
        let Some(role) = self.roles.get(self.role) else {
            return "";
        };
        match role.char_indices().nth(self.shown) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    fn role_len(&self) -> usize {
        self.roles[self.role].chars().count()
    }

    fn type_char(&mut self) -> Duration {
        self.phase = Phase::Typing;
        self.shown += 1;
        if self.shown >= self.role_len() {
            self.shown = self.role_len();
            self.phase = Phase::PausedFull;
            self.timing.pause_full
        } else {
            self.timing.type_delay
        }
    }

    fn delete_char(&mut self) -> Duration {
        self.phase = Phase::Deleting;
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.role = (self.role + 1) % self.roles.len();
            self.phase = Phase::PausedEmpty;
            self.timing.pause_empty
        } else {
            self.timing.delete_delay
        }
    }
}

impl Step for Typewriter {
    /// Advance one tick. `None` when there are no roles to animate.
    fn step(&mut self) -> Option<Duration> {
        if self.roles.is_empty() {
            return None;
        }
        let delay = match self.phase {
            Phase::Typing | Phase::PausedEmpty => self.type_char(),
            Phase::Deleting | Phase::PausedFull => self.delete_char(),
        };
        tracing::trace!(role = self.role, shown = self.shown, phase = ?self.phase, "typewriter step");
        Some(delay)
    }
}
