//! Shared plumbing for the four collection commands.

use std::str::FromStr;

use uuid::Uuid;

use crate::error::{DashError, Result};
use crate::model::Record;
use crate::store::Store;

/// Inserts a record at the front of its collection. Listings read
/// newest-first without ever sorting on load.
pub fn add_record<S: Store, T: Record>(store: &mut S, record: T) -> Result<()> {
    let mut records: Vec<T> = store.load();
    records.insert(0, record);
    store.save(&records)
}

/// Removes the record with the given id. Returns `false` when nothing
/// matched; the collection is not rewritten in that case.
pub fn remove_record<S: Store, T: Record>(store: &mut S, id: Uuid) -> Result<bool> {
    let mut records: Vec<T> = store.load();
    let before = records.len();
    records.retain(|r| r.id() != id);
    if records.len() == before {
        return Ok(false);
    }
    store.save(&records)?;
    Ok(true)
}

pub fn list_records<S: Store, T: Record>(store: &S) -> Vec<T> {
    store.load()
}

/// How the CLI names a record: a 1-based position in the newest-first
/// listing, or a full record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(usize),
    Id(Uuid),
}

impl FromStr for RecordSelector {
    type Err = DashError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            if index == 0 {
                return Err(DashError::Api("Record numbers start at 1".to_string()));
            }
            return Ok(RecordSelector::Index(index));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(RecordSelector::Id(id));
        }
        Err(DashError::Api(format!(
            "'{}' is not a record number or id",
            s
        )))
    }
}

/// Resolves a selector to a concrete id against the current listing.
/// An unresolvable selector is an error here, at the edge where the
/// user typed it; removing an id that has since vanished stays a no-op
/// deeper down.
pub fn resolve<S: Store, T: Record>(store: &S, selector: &RecordSelector) -> Result<Uuid> {
    let records: Vec<T> = store.load();
    match selector {
        RecordSelector::Index(index) => index
            .checked_sub(1)
            .and_then(|i| records.get(i))
            .map(Record::id)
            .ok_or_else(|| DashError::Api(format!("No record at position {}", index))),
        RecordSelector::Id(id) => {
            if records.iter().any(|r| r.id() == *id) {
                Ok(*id)
            } else {
                Err(DashError::Api(format!("No record with id {}", id)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::InMemoryStore;

    #[test]
    fn newest_record_lists_first() {
        let mut store = InMemoryStore::new();
        add_record(&mut store, Note::new("older").unwrap()).unwrap();
        add_record(&mut store, Note::new("newer").unwrap()).unwrap();

        let notes: Vec<Note> = list_records(&store);
        assert_eq!(notes[0].text, "newer");
        assert_eq!(notes[1].text, "older");
    }

    #[test]
    fn removing_unknown_id_changes_nothing() {
        let mut store = InMemoryStore::new();
        add_record(&mut store, Note::new("keep me").unwrap()).unwrap();

        let removed = remove_record::<_, Note>(&mut store, Uuid::new_v4()).unwrap();
        assert!(!removed);
        let notes: Vec<Note> = list_records(&store);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn selector_parses_numbers_and_ids() {
        assert_eq!("3".parse::<RecordSelector>().unwrap(), RecordSelector::Index(3));

        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<RecordSelector>().unwrap(),
            RecordSelector::Id(id)
        );

        assert!("0".parse::<RecordSelector>().is_err());
        assert!("banana".parse::<RecordSelector>().is_err());
    }

    #[test]
    fn resolving_out_of_range_index_is_an_error() {
        let mut store = InMemoryStore::new();
        add_record(&mut store, Note::new("only one").unwrap()).unwrap();

        assert!(resolve::<_, Note>(&store, &RecordSelector::Index(1)).is_ok());
        assert!(resolve::<_, Note>(&store, &RecordSelector::Index(2)).is_err());
        assert!(resolve::<_, Note>(&store, &RecordSelector::Id(Uuid::new_v4())).is_err());
    }
}
