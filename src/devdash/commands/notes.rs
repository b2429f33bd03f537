//! `devdash note` subcommands.

use crate::commands::helpers::{self, RecordSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::Store;
use crate::view::PanelData;

/// Adds a note. Blank text is not an error: the command comes back
/// with the unchanged listing, and only verbose mode mentions the skip.
pub fn add<S: Store>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::new();
    match Note::new(text) {
        Some(note) => {
            helpers::add_record(store, note)?;
            result.add_message(CmdMessage::success("Note added"));
        }
        None => result.add_message(CmdMessage::info("Ignoring empty note")),
    }
    Ok(result.with_listed(PanelData::Notes(helpers::list_records(store))))
}

pub fn remove<S: Store>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Note>(store, selector)?;
    let mut result = CmdResult::new();
    if helpers::remove_record::<S, Note>(store, id)? {
        result.add_message(CmdMessage::success("Note removed"));
    }
    Ok(result.with_listed(PanelData::Notes(helpers::list_records(store))))
}

pub fn list<S: Store>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::new().with_listed(PanelData::Notes(helpers::list_records(store))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use crate::view::PanelData;

    fn listed_notes(result: &CmdResult) -> &[Note] {
        match result.listed.as_ref() {
            Some(PanelData::Notes(notes)) => notes,
            other => panic!("expected a notes listing, got {:?}", other),
        }
    }

    #[test]
    fn added_notes_survive_a_reload() {
        let mut store = InMemoryStore::new();
        add(&mut store, "buy stamps").unwrap();
        add(&mut store, "call the dentist").unwrap();

        let listed = list(&store).unwrap();
        let notes = listed_notes(&listed);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "call the dentist");
        assert_eq!(notes[1].text, "buy stamps");
    }

    #[test]
    fn blank_note_is_silently_skipped() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, "   ").unwrap();

        assert!(listed_notes(&result).is_empty());
        // Only an informational message, nothing success-level.
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == crate::commands::MessageLevel::Info));
    }

    #[test]
    fn remove_by_position_targets_the_listing_order() {
        let mut store = InMemoryStore::new();
        add(&mut store, "older").unwrap();
        add(&mut store, "newer").unwrap();

        let result = remove(&mut store, &RecordSelector::Index(1)).unwrap();
        let notes = listed_notes(&result);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "older");
    }

    #[test]
    fn remove_with_stale_selector_is_an_error() {
        let mut store = InMemoryStore::new();
        add(&mut store, "one note").unwrap();
        assert!(remove(&mut store, &RecordSelector::Index(5)).is_err());
    }
}
