//! `devdash todo` subcommands.

use uuid::Uuid;

use crate::commands::helpers::{self, RecordSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Todo;
use crate::store::Store;
use crate::view::PanelData;

pub fn add<S: Store>(store: &mut S, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::new();
    match Todo::new(text) {
        Some(todo) => {
            helpers::add_record(store, todo)?;
            result.add_message(CmdMessage::success("Todo added"));
        }
        None => result.add_message(CmdMessage::info("Ignoring empty todo")),
    }
    Ok(result.with_listed(PanelData::Todos(helpers::list_records(store))))
}

pub fn remove<S: Store>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Todo>(store, selector)?;
    let mut result = CmdResult::new();
    if helpers::remove_record::<S, Todo>(store, id)? {
        result.add_message(CmdMessage::success("Todo removed"));
    }
    Ok(result.with_listed(PanelData::Todos(helpers::list_records(store))))
}

pub fn toggle<S: Store>(store: &mut S, selector: &RecordSelector) -> Result<CmdResult> {
    let id = helpers::resolve::<S, Todo>(store, selector)?;
    let mut result = CmdResult::new();
    if let Some(done) = toggle_by_id(store, id)? {
        let message = if done { "Marked as done" } else { "Marked as open" };
        result.add_message(CmdMessage::success(message));
    }
    Ok(result.with_listed(PanelData::Todos(helpers::list_records(store))))
}

/// Flips the completion flag of the todo with the given id. Returns the
/// new state, or `None` when no todo matched (the store is untouched).
pub fn toggle_by_id<S: Store>(store: &mut S, id: Uuid) -> Result<Option<bool>> {
    let mut todos: Vec<Todo> = store.load();
    let mut flipped = None;
    for todo in &mut todos {
        if todo.id == id {
            todo.completed = !todo.completed;
            flipped = Some(todo.completed);
        }
    }
    if flipped.is_some() {
        store.save(&todos)?;
    }
    Ok(flipped)
}

pub fn list<S: Store>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::new().with_listed(PanelData::Todos(helpers::list_records(store))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut store = InMemoryStore::new();
        add(&mut store, "water the plants").unwrap();

        toggle(&mut store, &RecordSelector::Index(1)).unwrap();
        let todos: Vec<Todo> = store.load();
        assert!(todos[0].completed);

        toggle(&mut store, &RecordSelector::Index(1)).unwrap();
        let todos: Vec<Todo> = store.load();
        assert!(!todos[0].completed);
    }

    #[test]
    fn toggling_a_vanished_id_is_a_no_op() {
        let mut store = InMemoryStore::new();
        add(&mut store, "still open").unwrap();
        let before: Vec<Todo> = store.load();

        let flipped = toggle_by_id(&mut store, Uuid::new_v4()).unwrap();
        assert_eq!(flipped, None);
        let after: Vec<Todo> = store.load();
        assert_eq!(after, before);
    }

    #[test]
    fn completion_survives_a_reload() {
        let mut store = InMemoryStore::new();
        add(&mut store, "ship the release").unwrap();
        toggle(&mut store, &RecordSelector::Index(1)).unwrap();

        let todos: Vec<Todo> = store.load();
        assert!(todos[0].completed);
        assert_eq!(todos[0].text, "ship the release");
    }
}
