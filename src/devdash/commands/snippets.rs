//! `devdash snippet` subcommands.

use crate::clipboard;
use crate::commands::helpers::{self, RecordSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Snippet;
use crate::store::Store;
use crate::view::PanelData;

pub fn add<S: Store>(store: &mut S, title: &str, code: &str) -> Result<CmdResult> {
    let mut result = CmdResult::new();
    match Snippet::new(title, code) {
        Some(snippet) => {
            helpers::add_record(store, snippet)?;
            result.add_message(CmdMessage::success("Snippet added"));
        }
        None => result.add_message(CmdMessage::info("Ignoring snippet with blank title or code")),
    }
    Ok(result.with_listed(PanelData::Snippets(helpers::list_records(store))))
}

pub fn remove<S: Store>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Snippet>(store, selector)?;
    let mut result = CmdResult::new();
    if helpers::remove_record::<S, Snippet>(store, id)? {
        result.add_message(CmdMessage::success("Snippet removed"));
    }
    Ok(result.with_listed(PanelData::Snippets(helpers::list_records(store))))
}

/// Copies a snippet's code to the system clipboard and also returns it
/// as raw text. A missing clipboard tool downgrades to a warning; the
/// text still prints.
pub fn copy<S: Store>(store: &S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Snippet>(store, selector)?;
    let snippets: Vec<Snippet> = store.load();
    let mut result = CmdResult::new();
    if let Some(snippet) = snippets.into_iter().find(|s| s.id == id) {
        match clipboard::copy_to_clipboard(&snippet.code) {
            Ok(()) => {
                result.add_message(CmdMessage::success(format!("Copied '{}'", snippet.title)))
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!("Clipboard unavailable: {}", e)))
            }
        }
        result = result.with_text(snippet.code);
    }
    Ok(result)
}

pub fn list<S: Store>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::new().with_listed(PanelData::Snippets(helpers::list_records(store))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn code_keeps_inner_formatting() {
        let mut store = InMemoryStore::new();
        add(&mut store, "loop", "  for i in 0..3 {\n      dbg!(i);\n  }  ").unwrap();

        let snippets: Vec<Snippet> = store.load();
        assert_eq!(snippets[0].code, "for i in 0..3 {\n      dbg!(i);\n  }");
    }

    #[test]
    fn copy_returns_the_code_as_text() {
        let mut store = InMemoryStore::new();
        add(&mut store, "greeting", "println!(\"hi\");").unwrap();

        let result = copy(&store, &RecordSelector::Index(1)).unwrap();
        assert_eq!(result.text.as_deref(), Some("println!(\"hi\");"));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = InMemoryStore::new();
        add(&mut store, "   ", "real code").unwrap();

        let snippets: Vec<Snippet> = store.load();
        assert!(snippets.is_empty());
    }
}
