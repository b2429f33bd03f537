//! `devdash bookmark` subcommands.

use crate::commands::helpers::{self, RecordSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Bookmark;
use crate::store::Store;
use crate::view::PanelData;

/// Adds a bookmark. The URL is normalized on the way in, so `rust-lang.org`
/// and `https://rust-lang.org` land as the same thing.
pub fn add<S: Store>(store: &mut S, title: &str, url: &str) -> Result<CmdResult> {
    let mut result = CmdResult::new();
    match Bookmark::new(title, url) {
        Some(bookmark) => {
            let url = bookmark.url.clone();
            helpers::add_record(store, bookmark)?;
            result.add_message(CmdMessage::success(format!("Bookmarked {}", url)));
        }
        None => result.add_message(CmdMessage::info("Ignoring bookmark with blank title or URL")),
    }
    Ok(result.with_listed(PanelData::Bookmarks(helpers::list_records(store))))
}

pub fn remove<S: Store>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Bookmark>(store, selector)?;
    let mut result = CmdResult::new();
    if helpers::remove_record::<S, Bookmark>(store, id)? {
        result.add_message(CmdMessage::success("Bookmark removed"));
    }
    Ok(result.with_listed(PanelData::Bookmarks(helpers::list_records(store))))
}

pub fn list<S: Store>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::new().with_listed(PanelData::Bookmarks(helpers::list_records(store))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn bare_domain_gets_https() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Example", "example.com").unwrap();

        let bookmarks: Vec<Bookmark> = store.load();
        assert_eq!(bookmarks[0].url, "https://example.com");
    }

    #[test]
    fn existing_scheme_is_kept() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Plain HTTP", "http://example.com").unwrap();

        let bookmarks: Vec<Bookmark> = store.load();
        assert_eq!(bookmarks[0].url, "http://example.com");
    }

    #[test]
    fn blank_fields_are_skipped_silently() {
        let mut store = InMemoryStore::new();
        add(&mut store, "  ", "example.com").unwrap();
        add(&mut store, "No URL", "   ").unwrap();

        let bookmarks: Vec<Bookmark> = store.load();
        assert!(bookmarks.is_empty());
    }
}
