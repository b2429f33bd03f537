//! Daily journal: one entry per calendar date, a movable date cursor,
//! and the save rules shared by manual saves, navigation, and the
//! periodic autosave.
//!
//! The cursor never moves past today. Dates are compared without a time
//! component, so the boundary flips exactly at local midnight.

use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::error::{DashError, Result};
use crate::store::Store;

/// How often an open journal surface flushes its buffer to the store.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// How long the save confirmation stays visible after a manual save.
pub const SAVED_NOTICE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// Snapshot of the journal at the cursor date, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    pub date: NaiveDate,
    /// Stored entry text, empty when the date has no entry.
    pub content: String,
    pub can_go_forward: bool,
}

/// What a save did to the stored map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Stored,
    /// The content was blank, so the entry for the date was dropped.
    Removed,
}

#[derive(Debug, Clone)]
pub struct LogNavigator {
    cursor: NaiveDate,
}

impl LogNavigator {
    pub fn new(date: NaiveDate) -> Self {
        Self { cursor: date }
    }

    pub fn at_today() -> Self {
        Self::new(Self::today())
    }

    /// Today in the user's local timezone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn load<S: Store>(&self, store: &S) -> LogView {
        let logs = store.load_logs();
        let content = logs.get(&self.cursor).cloned().unwrap_or_default();
        LogView {
            date: self.cursor,
            content,
            can_go_forward: self.cursor < Self::today(),
        }
    }

    /// Persists `content` under the cursor date. Blank content deletes
    /// the entry instead, so abandoned days leave nothing behind.
    pub fn save<S: Store>(&self, store: &mut S, content: &str) -> Result<SaveOutcome> {
        let mut logs = store.load_logs();
        let trimmed = content.trim();
        let outcome = if trimmed.is_empty() {
            logs.remove(&self.cursor);
            SaveOutcome::Removed
        } else {
            logs.insert(self.cursor, trimmed.to_string());
            SaveOutcome::Stored
        };
        store.save_logs(&logs)?;
        Ok(outcome)
    }

    /// Saves the current buffer, moves the cursor one day, and returns
    /// the view at the new date. The save happens whatever the buffer
    /// holds; moving away must never lose text. Stepping forward from
    /// today or later is refused outright: nothing is saved, the cursor
    /// stays, and the unchanged view comes back.
    pub fn navigate<S: Store>(
        &mut self,
        store: &mut S,
        direction: Direction,
        content: &str,
    ) -> Result<LogView> {
        if direction == Direction::Forward && self.cursor >= Self::today() {
            return Ok(self.load(store));
        }
        self.save(store, content)?;
        let next = match direction {
            Direction::Back => self.cursor.pred_opt(),
            Direction::Forward => self.cursor.succ_opt(),
        };
        self.cursor = next.ok_or_else(|| DashError::Api("Date out of range".to_string()))?;
        Ok(self.load(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saving_blank_content_deletes_the_entry() {
        let mut store = InMemoryStore::new();
        let navigator = LogNavigator::new(day(2025, 3, 10));

        assert_eq!(navigator.save(&mut store, "went for a run").unwrap(), SaveOutcome::Stored);
        assert_eq!(navigator.save(&mut store, "  \n  ").unwrap(), SaveOutcome::Removed);

        assert!(store.load_logs().is_empty());
        assert_eq!(navigator.load(&store).content, "");
    }

    #[test]
    fn content_is_stored_trimmed() {
        let mut store = InMemoryStore::new();
        let navigator = LogNavigator::new(day(2025, 3, 10));
        navigator.save(&mut store, "  two lines\nof notes  \n").unwrap();

        let logs = store.load_logs();
        assert_eq!(logs[&day(2025, 3, 10)], "two lines\nof notes");
    }

    #[test]
    fn navigating_back_saves_first() {
        let mut store = InMemoryStore::new();
        let today = LogNavigator::today();
        let mut navigator = LogNavigator::at_today();

        let view = navigator.navigate(&mut store, Direction::Back, "draft text").unwrap();

        assert_eq!(store.load_logs()[&today], "draft text");
        assert_eq!(view.date, today.pred_opt().unwrap());
        assert!(view.can_go_forward);
        assert_eq!(view.content, "");
    }

    #[test]
    fn forward_from_today_is_refused_without_saving() {
        let mut store = InMemoryStore::new();
        let today = LogNavigator::today();
        let mut navigator = LogNavigator::at_today();

        let view = navigator.navigate(&mut store, Direction::Forward, "not yet saved").unwrap();

        assert_eq!(navigator.cursor(), today);
        assert_eq!(view.date, today);
        assert!(!view.can_go_forward);
        assert!(store.load_logs().is_empty());
    }

    #[test]
    fn forward_from_yesterday_returns_to_today() {
        let mut store = InMemoryStore::new();
        let today = LogNavigator::today();
        let yesterday = today.pred_opt().unwrap();
        let mut navigator = LogNavigator::new(yesterday);

        let view = navigator.navigate(&mut store, Direction::Forward, "yesterday's entry").unwrap();

        assert_eq!(view.date, today);
        assert!(!view.can_go_forward);
        assert_eq!(store.load_logs()[&yesterday], "yesterday's entry");
    }

    #[test]
    fn loading_a_date_with_no_entry_is_empty() {
        let store = InMemoryStore::new();
        let navigator = LogNavigator::new(day(2024, 12, 31));
        let view = navigator.load(&store);
        assert_eq!(view.content, "");
        assert!(view.can_go_forward);
    }
}
