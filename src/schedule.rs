//! Cancelable scheduled tasks.
//!
//! A task is a step function that reports how long to wait before it should
//! run again. `ScheduledTask` keeps the next due time and lets the owner
//! cancel or resume it, so an event loop can drive any number of timed
//! animations by polling.

use std::time::{Duration, Instant};

/// A unit of timed work.
pub trait Step {
    /// Run one step. Returns the delay until the next step, or `None` when the
    /// task has nothing further to do.
    fn step(&mut self) -> Option<Duration>;
}

/// A `Step` paired with its schedule.
#[derive(Debug, Clone)]
pub struct ScheduledTask<T> {
    task: T,
    due: Option<Instant>,
}

impl<T: Step> ScheduledTask<T> {
    /// Schedule `task` with its first step due at `now`.
    pub fn start(task: T, now: Instant) -> Self {
        Self {
            task,
            due: Some(now),
        }
    }

    /// Wrap `task` without scheduling it.
    pub fn idle(task: T) -> Self {
        Self { task, due: None }
    }

    /// Run the task if it is due. Returns whether a step ran.
    ///
    /// At most one step runs per call; a late poll does not replay missed steps.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = self.task.step().map(|delay| now + delay);
                true
            }
            _ => false,
        }
    }

    /// Stop scheduling. The task keeps its state.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Schedule the next step at `now` if the task is not already running.
    pub fn resume(&mut self, now: Instant) {
        if self.due.is_none() {
            self.due = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.due
    }

    /// Time until the next step, zero if overdue, `None` when cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    pub fn task(&self) -> &T {
        &self.task
    }
}
