//! Core data model: the four collection record types, the daily log map,
//! and the UI theme.
//!
//! Record constructors validate their input and return `None` for blank
//! text, so a collection can never contain an empty entry. All records
//! serialize with camelCase field names, which is also the wire format
//! used by export bundles.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DashError;
use crate::store::StorageKey;

/// Daily journal entries, keyed by calendar date. `BTreeMap` keeps the
/// dates ordered, so iteration is always oldest-first.
pub type LogMap = BTreeMap<NaiveDate, String>;

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A todo item with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// A saved link with a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// A titled block of code or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note from raw input. Returns `None` when the text is
    /// empty after trimming; the stored text is the trimmed form.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }
}

impl Todo {
    /// Builds an open todo. Returns `None` when the text is blank.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        })
    }
}

impl Bookmark {
    /// Builds a bookmark. Both fields must be non-blank; the URL is
    /// normalized with [`normalize_url`] before it is stored.
    pub fn new(title: &str, url: &str) -> Option<Self> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            url: normalize_url(url),
            created_at: Utc::now(),
        })
    }
}

impl Snippet {
    /// Builds a snippet. Returns `None` when either the title or the
    /// code is blank. The code keeps its inner formatting; only leading
    /// and trailing whitespace is trimmed.
    pub fn new(title: &str, code: &str) -> Option<Self> {
        let title = title.trim();
        let code = code.trim();
        if title.is_empty() || code.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            code: code.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Prefixes `https://` to URLs entered without a scheme. Anything that
/// already carries a scheme separator is left untouched.
pub fn normalize_url(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// A persistable collection record. Ties each record type to its storage
/// key so that generic load/save and the collection commands can work
/// over any of the four collections.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KEY: StorageKey;

    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Record for Note {
    const KEY: StorageKey = StorageKey::Notes;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Todo {
    const KEY: StorageKey = StorageKey::Todos;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Bookmark {
    const KEY: StorageKey = StorageKey::Bookmarks;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Snippet {
    const KEY: StorageKey = StorageKey::Snippets;

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Color theme for the rendered dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DashError::Api(format!(
                "Unknown theme '{}' (expected 'light' or 'dark')",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_text_is_trimmed() {
        let note = Note::new("  remember the milk  ").unwrap();
        assert_eq!(note.text, "remember the milk");
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(Note::new("   ").is_none());
        assert!(Todo::new("").is_none());
        assert!(Bookmark::new("docs", "   ").is_none());
        assert!(Bookmark::new("  ", "example.com").is_none());
        assert!(Snippet::new("title only", "  ").is_none());
    }

    #[test]
    fn new_todos_start_open() {
        let todo = Todo::new("water the plants").unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn bookmark_url_gets_a_scheme() {
        let bm = Bookmark::new("Example", "example.com").unwrap();
        assert_eq!(bm.url, "https://example.com");
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("ftp://files.example.com"), "ftp://files.example.com");
        assert_eq!(normalize_url("localhost:3000"), "https://localhost:3000");
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let note = Note::new("hello").unwrap();
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn theme_round_trips_through_strings() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" LIGHT ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::default().to_string(), "light");
    }
}
