//! Substring search across every collection.
//!
//! A search scans the searchable text of each collection with a
//! case-insensitive substring match: note and todo text, bookmark
//! titles and URLs, snippet titles and code, and daily log content
//! (dates themselves are never matched). Results come back grouped
//! into sections in the fixed panel order, with empty sections left
//! out entirely.

use crate::model::{Bookmark, Note, Snippet, Todo};
use crate::store::Store;
use crate::view::PanelId;

/// Longest prefix of a daily log entry shown in a search hit.
pub const LOG_PREVIEW_LEN: usize = 100;

/// One span of a displayed text, either as-is or part of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

/// One matching record, broken into plain and highlighted spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Line above the body, e.g. the date of a daily log entry.
    pub heading: Option<String>,
    pub segments: Vec<MatchSegment>,
    /// Secondary line under the body: a bookmark's URL or a snippet's
    /// code, highlighted like the body.
    pub detail: Option<Vec<MatchSegment>>,
    /// Completion state, for todo hits only.
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub panel: PanelId,
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub sections: Vec<Section>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Runs a search. `None` means search is inactive: the query was the
/// empty string. Anything else, even a lone space, is a real query,
/// and a real query with no matches comes back as `Some` with no
/// sections so the caller can say "no results" instead of going quiet.
pub fn run<S: Store>(store: &S, query: &str) -> Option<SearchResults> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    let mut sections = Vec::new();
    for panel in PanelId::ALL {
        let hits = match panel {
            PanelId::Notes => note_hits(store, query, &needle),
            PanelId::Todos => todo_hits(store, query, &needle),
            PanelId::Bookmarks => bookmark_hits(store, query, &needle),
            PanelId::Snippets => snippet_hits(store, query, &needle),
            PanelId::DailyLog => log_hits(store, query, &needle),
        };
        if !hits.is_empty() {
            sections.push(Section { panel, hits });
        }
    }
    Some(SearchResults { sections })
}

fn contains(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

fn note_hits<S: Store>(store: &S, query: &str, needle: &str) -> Vec<Hit> {
    let notes: Vec<Note> = store.load();
    notes
        .iter()
        .filter(|n| contains(&n.text, needle))
        .map(|n| Hit {
            heading: None,
            segments: highlight(&n.text, query),
            detail: None,
            completed: None,
        })
        .collect()
}

fn todo_hits<S: Store>(store: &S, query: &str, needle: &str) -> Vec<Hit> {
    let todos: Vec<Todo> = store.load();
    todos
        .iter()
        .filter(|t| contains(&t.text, needle))
        .map(|t| Hit {
            heading: None,
            segments: highlight(&t.text, query),
            detail: None,
            completed: Some(t.completed),
        })
        .collect()
}

fn bookmark_hits<S: Store>(store: &S, query: &str, needle: &str) -> Vec<Hit> {
    let bookmarks: Vec<Bookmark> = store.load();
    bookmarks
        .iter()
        .filter(|b| contains(&b.title, needle) || contains(&b.url, needle))
        .map(|b| Hit {
            heading: None,
            segments: highlight(&b.title, query),
            detail: Some(highlight(&b.url, query)),
            completed: None,
        })
        .collect()
}

fn snippet_hits<S: Store>(store: &S, query: &str, needle: &str) -> Vec<Hit> {
    let snippets: Vec<Snippet> = store.load();
    snippets
        .iter()
        .filter(|s| contains(&s.title, needle) || contains(&s.code, needle))
        .map(|s| Hit {
            heading: None,
            segments: highlight(&s.title, query),
            detail: Some(highlight(&s.code, query)),
            completed: None,
        })
        .collect()
}

fn log_hits<S: Store>(store: &S, query: &str, needle: &str) -> Vec<Hit> {
    store
        .load_logs()
        .iter()
        .filter(|(_, content)| contains(content, needle))
        .map(|(date, content)| Hit {
            heading: Some(date.format("%Y-%m-%d").to_string()),
            segments: highlight(&log_preview(content), query),
            detail: None,
            completed: None,
        })
        .collect()
}

/// First [`LOG_PREVIEW_LEN`] characters of an entry, with a trailing
/// ellipsis only when something was actually cut off.
fn log_preview(content: &str) -> String {
    let mut preview = String::new();
    for (i, ch) in content.chars().enumerate() {
        if i == LOG_PREVIEW_LEN {
            preview.push('…');
            return preview;
        }
        preview.push(ch);
    }
    preview
}

/// Splits `text` into plain and matching spans for the query. Matching
/// is case-insensitive. The split is only attempted when the lowercased
/// text maps byte-for-byte onto the original; for the handful of
/// scripts where lowercasing changes the length, the whole text comes
/// back as one plain span instead of risking a bad slice. Highlighting
/// can dim, never fail.
pub fn highlight(text: &str, query: &str) -> Vec<MatchSegment> {
    let plain = || vec![MatchSegment::Plain(text.to_string())];
    if query.is_empty() {
        return plain();
    }
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    if text_lower.len() != text.len() {
        return plain();
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, matched) in text_lower.match_indices(&query_lower) {
        let end = start + matched.len();
        let before = match text.get(cursor..start) {
            Some(s) => s,
            None => return plain(),
        };
        let hit = match text.get(start..end) {
            Some(s) => s,
            None => return plain(),
        };
        if !before.is_empty() {
            segments.push(MatchSegment::Plain(before.to_string()));
        }
        segments.push(MatchSegment::Match(hit.to_string()));
        cursor = end;
    }
    if segments.is_empty() {
        return plain();
    }
    if let Some(rest) = text.get(cursor..) {
        if !rest.is_empty() {
            segments.push(MatchSegment::Plain(rest.to_string()));
        }
    }
    segments
}
