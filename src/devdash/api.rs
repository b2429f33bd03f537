//! High-level entry point tying one store to every operation.
//!
//! The CLI only ever talks to [`DashApi`]. Embedding the library
//! somewhere else means constructing an API over any [`Store`]
//! implementation; there is no global instance anywhere, so two APIs
//! over two stores never share state.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::commands::export::Backup;
use crate::commands::helpers::RecordSelector;
use crate::commands::{self, CmdResult};
use crate::config::DashConfig;
use crate::error::Result;
use crate::journal::{Direction, LogNavigator, LogView, SaveOutcome};
use crate::model::Theme;
use crate::search::{self, SearchResults};
use crate::store::Store;
use crate::view::{PanelId, ViewSync};

pub struct DashApi<S: Store> {
    store: S,
}

impl<S: Store> DashApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // Notes

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        commands::notes::add(&mut self.store, text)
    }

    pub fn remove_note(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::notes::remove(&mut self.store, selector)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::notes::list(&self.store)
    }

    // Todos

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        commands::todos::add(&mut self.store, text)
    }

    pub fn remove_todo(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::todos::remove(&mut self.store, selector)
    }

    pub fn toggle_todo(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::todos::toggle(&mut self.store, selector)
    }

    pub fn list_todos(&self) -> Result<CmdResult> {
        commands::todos::list(&self.store)
    }

    // Bookmarks

    pub fn add_bookmark(&mut self, title: &str, url: &str) -> Result<CmdResult> {
        commands::bookmarks::add(&mut self.store, title, url)
    }

    pub fn remove_bookmark(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::bookmarks::remove(&mut self.store, selector)
    }

    pub fn list_bookmarks(&self) -> Result<CmdResult> {
        commands::bookmarks::list(&self.store)
    }

    // Snippets

    pub fn add_snippet(&mut self, title: &str, code: &str) -> Result<CmdResult> {
        commands::snippets::add(&mut self.store, title, code)
    }

    pub fn remove_snippet(&mut self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::snippets::remove(&mut self.store, selector)
    }

    pub fn copy_snippet(&self, selector: &RecordSelector) -> Result<CmdResult> {
        commands::snippets::copy(&self.store, selector)
    }

    pub fn list_snippets(&self) -> Result<CmdResult> {
        commands::snippets::list(&self.store)
    }

    // Search

    pub fn search(&self, query: &str) -> Option<SearchResults> {
        search::run(&self.store, query)
    }

    // Daily journal

    pub fn show_log(&self, date: Option<NaiveDate>) -> Result<CmdResult> {
        commands::logs::show(&self.store, date)
    }

    pub fn write_log(
        &mut self,
        date: Option<NaiveDate>,
        content: &str,
        autosave: bool,
    ) -> Result<CmdResult> {
        commands::logs::save(&mut self.store, date, content, autosave)
    }

    pub fn load_log(&self, navigator: &LogNavigator) -> LogView {
        navigator.load(&self.store)
    }

    pub fn save_log(&mut self, navigator: &LogNavigator, content: &str) -> Result<SaveOutcome> {
        navigator.save(&mut self.store, content)
    }

    pub fn navigate_log(
        &mut self,
        navigator: &mut LogNavigator,
        direction: Direction,
        content: &str,
    ) -> Result<LogView> {
        navigator.navigate(&mut self.store, direction, content)
    }

    // Theme

    pub fn show_theme(&self) -> Result<CmdResult> {
        commands::theme::show(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.store)
    }

    // Backup

    pub fn export(&self, path: Option<PathBuf>, config: &DashConfig) -> Result<CmdResult> {
        commands::export::run(&self.store, path, config)
    }

    pub fn apply_backup(&mut self, backup: &Backup) -> Result<CmdResult> {
        commands::import::apply(&mut self.store, backup)
    }

    // Views

    /// Re-renders every surface attached to `panel` from this API's
    /// store.
    pub fn render_all(&self, views: &mut ViewSync, panel: PanelId) {
        views.render_all(&self.store, panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn two_apis_over_two_stores_stay_independent() {
        let mut first = DashApi::new(InMemoryStore::new());
        let mut second = DashApi::new(InMemoryStore::new());

        first.add_note("only in the first").unwrap();
        second.add_note("only in the second").unwrap();

        let notes: Vec<crate::model::Note> = first.store().load();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "only in the first");

        let notes: Vec<crate::model::Note> = second.store().load();
        assert_eq!(notes[0].text, "only in the second");
    }

    #[test]
    fn facade_round_trip_matches_the_commands() {
        let mut api = DashApi::new(InMemoryStore::new());
        api.add_todo("via the facade").unwrap();
        api.toggle_todo(&RecordSelector::Index(1)).unwrap();

        let todos: Vec<crate::model::Todo> = api.store().load();
        assert!(todos[0].completed);
    }
}
