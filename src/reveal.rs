//! One-shot visibility reveal.
//!
//! Targets start hidden. The first time a target's intersection ratio with the
//! viewport reaches the threshold it becomes visible and is no longer
//! observed. Nothing ever hides it again.

use std::collections::HashSet;
use std::hash::Hash;

/// Default fraction of a target that must be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// A visibility observation for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<K> {
    pub target: K,
    /// Fraction of the target inside the viewport, `0.0..=1.0`.
    pub ratio: f64,
}

/// Fraction of the span `[start, start + len)` covered by the viewport
/// `[view_start, view_start + view_len)`.
pub fn intersection_ratio(start: usize, len: usize, view_start: usize, view_len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let lo = start.max(view_start);
    let hi = (start + len).min(view_start + view_len);
    if hi <= lo {
        0.0
    } else {
        (hi - lo) as f64 / len as f64
    }
}

/// Tracks which targets are still hidden.
#[derive(Debug, Clone)]
pub struct Revealer<K> {
    threshold: f64,
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Copy> Revealer<K> {
    /// `threshold` is clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start observing `target`. Already revealed targets stay revealed.
    pub fn observe(&mut self, target: K) {
        if !self.revealed.contains(&target) {
            self.observed.insert(target);
        }
    }

    pub fn unobserve(&mut self, target: &K) {
        self.observed.remove(target);
    }

    pub fn is_observed(&self, target: &K) -> bool {
        self.observed.contains(target)
    }

    pub fn is_revealed(&self, target: &K) -> bool {
        self.revealed.contains(target)
    }

    /// Whether every observed target has been revealed.
    pub fn is_done(&self) -> bool {
        self.observed.is_empty()
    }

    /// Handle a batch of observations and return the targets revealed by it.
    ///
    /// Entries are independent; unobserved targets are ignored.
    pub fn process<I>(&mut self, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = Intersection<K>>,
    {
        let mut newly = Vec::new();
        for entry in entries {
            if !self.observed.contains(&entry.target) {
                continue;
            }
            if entry.ratio > 0.0 && entry.ratio >= self.threshold {
                self.observed.remove(&entry.target);
                self.revealed.insert(entry.target);
                newly.push(entry.target);
            }
        }
        if !newly.is_empty() {
            tracing::debug!(count = newly.len(), "revealed targets");
        }
        newly
    }
}

impl<K: Eq + Hash + Copy> Default for Revealer<K> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
