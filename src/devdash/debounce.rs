//! Trailing-edge debouncer for live search input.
//!
//! Keystrokes arrive faster than the store is worth scanning, so the
//! session loop feeds every edit through this state machine and only
//! runs a scan once the input has been quiet for the full window.
//! There is a single pending slot: a newer query replaces the older
//! one and restarts the clock, so a burst of edits costs one scan.
//!
//! Time comes in as a parameter instead of being read off the wall,
//! which keeps the timing behavior testable to the millisecond.

use std::time::{Duration, Instant};

/// Quiet period a query must survive before it fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(Instant, String)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedules `query` to fire once the window elapses, replacing
    /// whatever was waiting.
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((now + self.window, query.into()));
    }

    /// Returns the pending query once its deadline has passed, clearing
    /// the slot. Before the deadline, and when nothing is pending,
    /// returns `None`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = match &self.pending {
            Some((deadline, _)) => now >= *deadline,
            None => false,
        };
        if due {
            self.pending.take().map(|(_, query)| query)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}
