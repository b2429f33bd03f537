//! Storage layer for the dashboard.
//!
//! All persistent state lives behind the [`Store`] trait: six keyed
//! values, each stored as one JSON document. The trait only asks an
//! implementation for raw string reads and writes; the typed accessors
//! are provided methods built on top, so every backend gets the same
//! semantics for free.
//!
//! Loads are infallible by contract. A missing value or a document that
//! no longer parses produces the empty default for that key, never an
//! error. The dashboard must come up usable even when a data file was
//! truncated or hand-edited into garbage; losing one collection to
//! corruption must not take the others down with it.
//!
//! Two implementations ship: [`FileStore`] writes one file per key
//! under the data directory, and [`InMemoryStore`] backs tests.

pub mod fs;
pub mod memory;

pub use fs::FileStore;
pub use memory::InMemoryStore;

use crate::error::Result;
use crate::model::{LogMap, Record, Theme};

/// The six persisted values. Each key maps to its own document, so a
/// corrupt collection never affects its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Notes,
    Todos,
    Bookmarks,
    Snippets,
    DailyLogs,
    Theme,
}

impl StorageKey {
    pub fn file_name(self) -> &'static str {
        match self {
            StorageKey::Notes => "notes.json",
            StorageKey::Todos => "todos.json",
            StorageKey::Bookmarks => "bookmarks.json",
            StorageKey::Snippets => "snippets.json",
            StorageKey::DailyLogs => "daily_logs.json",
            StorageKey::Theme => "theme.json",
        }
    }
}

pub trait Store {
    /// Reads the raw document under `key`, or `None` when absent.
    fn read_raw(&self, key: StorageKey) -> Option<String>;

    /// Writes the raw document under `key`, replacing what was there.
    fn write_raw(&mut self, key: StorageKey, json: &str) -> Result<()>;

    /// Loads a collection. Absent or unparseable documents come back as
    /// the empty collection.
    fn load<T: Record>(&self) -> Vec<T> {
        self.read_raw(T::KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Replaces a collection wholesale.
    fn save<T: Record>(&mut self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        self.write_raw(T::KEY, &json)
    }

    fn load_logs(&self) -> LogMap {
        self.read_raw(StorageKey::DailyLogs)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_logs(&mut self, logs: &LogMap) -> Result<()> {
        let json = serde_json::to_string_pretty(logs)?;
        self.write_raw(StorageKey::DailyLogs, &json)
    }

    fn load_theme(&self) -> Theme {
        self.read_raw(StorageKey::Theme)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save_theme(&mut self, theme: Theme) -> Result<()> {
        let json = serde_json::to_string(&theme)?;
        self.write_raw(StorageKey::Theme, &json)
    }
}
