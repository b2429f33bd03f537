//! In-memory store for tests. Same contract as the file store, minus
//! the disk.

use std::collections::HashMap;

use crate::error::Result;
use crate::store::{StorageKey, Store};

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: HashMap<StorageKey, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn read_raw(&self, key: StorageKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn write_raw(&mut self, key: StorageKey, json: &str) -> Result<()> {
        self.values.insert(key, json.to_string());
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    //! Builder for seeding a store with records in tests.

    use chrono::NaiveDate;

    use super::InMemoryStore;
    use crate::model::{Bookmark, Note, Snippet, Todo};
    use crate::store::Store;

    #[derive(Default)]
    pub struct StoreBuilder {
        store: InMemoryStore,
    }

    impl StoreBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_note(mut self, text: &str) -> Self {
            let note = Note::new(text).expect("fixture note text must be non-blank");
            let mut notes: Vec<Note> = self.store.load();
            notes.insert(0, note);
            self.store.save(&notes).expect("in-memory save");
            self
        }

        pub fn with_todo(mut self, text: &str, completed: bool) -> Self {
            let mut todo = Todo::new(text).expect("fixture todo text must be non-blank");
            todo.completed = completed;
            let mut todos: Vec<Todo> = self.store.load();
            todos.insert(0, todo);
            self.store.save(&todos).expect("in-memory save");
            self
        }

        pub fn with_bookmark(mut self, title: &str, url: &str) -> Self {
            let bm = Bookmark::new(title, url).expect("fixture bookmark must be non-blank");
            let mut bookmarks: Vec<Bookmark> = self.store.load();
            bookmarks.insert(0, bm);
            self.store.save(&bookmarks).expect("in-memory save");
            self
        }

        pub fn with_snippet(mut self, title: &str, code: &str) -> Self {
            let snippet = Snippet::new(title, code).expect("fixture snippet must be non-blank");
            let mut snippets: Vec<Snippet> = self.store.load();
            snippets.insert(0, snippet);
            self.store.save(&snippets).expect("in-memory save");
            self
        }

        pub fn with_log(mut self, date: NaiveDate, content: &str) -> Self {
            let mut logs = self.store.load_logs();
            logs.insert(date, content.to_string());
            self.store.save_logs(&logs).expect("in-memory save");
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
