//! Panel identity and view synchronization.
//!
//! Every rendered surface showing a collection registers with
//! [`ViewSync`]. After a mutation the caller re-renders the panel once;
//! the data is loaded a single time and handed to every surface
//! attached to that panel, so a dashboard panel and a fullscreen modal
//! over the same collection can never drift apart.

use chrono::NaiveDate;

use crate::journal::LogNavigator;
use crate::model::{Bookmark, Note, Snippet, Todo};
use crate::store::Store;

/// The five dashboard panels. Render targets and search sections are
/// keyed by this enum, never by a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Notes,
    Todos,
    Bookmarks,
    Snippets,
    DailyLog,
}

impl PanelId {
    /// Fixed presentation order, shared by the full dashboard render
    /// and the search result sections.
    pub const ALL: [PanelId; 5] = [
        PanelId::Notes,
        PanelId::Todos,
        PanelId::Bookmarks,
        PanelId::Snippets,
        PanelId::DailyLog,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PanelId::Notes => "Notes",
            PanelId::Todos => "Todos",
            PanelId::Bookmarks => "Bookmarks",
            PanelId::Snippets => "Snippets",
            PanelId::DailyLog => "Daily Logs",
        }
    }
}

/// Freshly loaded content of one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelData {
    Notes(Vec<Note>),
    Todos(Vec<Todo>),
    Bookmarks(Vec<Bookmark>),
    Snippets(Vec<Snippet>),
    Journal { date: NaiveDate, content: String },
}

impl PanelData {
    pub fn panel(&self) -> PanelId {
        match self {
            PanelData::Notes(_) => PanelId::Notes,
            PanelData::Todos(_) => PanelId::Todos,
            PanelData::Bookmarks(_) => PanelId::Bookmarks,
            PanelData::Snippets(_) => PanelId::Snippets,
            PanelData::Journal { .. } => PanelId::DailyLog,
        }
    }

    /// Loads the current content of `panel`. The journal panel loads
    /// the entry for `journal_date`.
    pub fn load<S: Store>(store: &S, panel: PanelId, journal_date: NaiveDate) -> Self {
        match panel {
            PanelId::Notes => PanelData::Notes(store.load()),
            PanelId::Todos => PanelData::Todos(store.load()),
            PanelId::Bookmarks => PanelData::Bookmarks(store.load()),
            PanelId::Snippets => PanelData::Snippets(store.load()),
            PanelId::DailyLog => {
                let content = store
                    .load_logs()
                    .get(&journal_date)
                    .cloned()
                    .unwrap_or_default();
                PanelData::Journal {
                    date: journal_date,
                    content,
                }
            }
        }
    }
}

/// Handle for detaching a surface, returned by [`ViewSync::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceId(u64);

/// Anything that can draw a panel: the dashboard grid, a fullscreen
/// modal, a plain stdout dump in the CLI.
pub trait Surface {
    fn panel(&self) -> PanelId;
    fn render(&mut self, data: &PanelData);
}

pub struct ViewSync {
    surfaces: Vec<(SurfaceId, Box<dyn Surface>)>,
    journal_date: NaiveDate,
    next_id: u64,
}

impl ViewSync {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            journal_date: LogNavigator::today(),
            next_id: 0,
        }
    }

    pub fn attach(&mut self, surface: Box<dyn Surface>) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.push((id, surface));
        id
    }

    pub fn detach(&mut self, id: SurfaceId) {
        self.surfaces.retain(|(sid, _)| *sid != id);
    }

    /// Points the journal panel at a different date. Takes effect on
    /// the next render.
    pub fn set_journal_date(&mut self, date: NaiveDate) {
        self.journal_date = date;
    }

    /// Re-renders every surface attached to `panel` from one load of
    /// the store, so all of them show the same records.
    pub fn render_all<S: Store>(&mut self, store: &S, panel: PanelId) {
        let data = PanelData::load(store, panel, self.journal_date);
        for (_, surface) in &mut self.surfaces {
            if surface.panel() == panel {
                surface.render(&data);
            }
        }
    }
}

impl Default for ViewSync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::commands::{helpers, notes};
    use crate::store::InMemoryStore;
    use uuid::Uuid;

    struct Recorder {
        panel: PanelId,
        seen: Rc<RefCell<Vec<PanelData>>>,
    }

    impl Surface for Recorder {
        fn panel(&self) -> PanelId {
            self.panel
        }

        fn render(&mut self, data: &PanelData) {
            self.seen.borrow_mut().push(data.clone());
        }
    }

    fn recorder(panel: PanelId) -> (Box<Recorder>, Rc<RefCell<Vec<PanelData>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let surface = Box::new(Recorder {
            panel,
            seen: Rc::clone(&seen),
        });
        (surface, seen)
    }

    fn note_ids(data: &PanelData) -> Vec<Uuid> {
        match data {
            PanelData::Notes(notes) => notes.iter().map(|n| n.id).collect(),
            other => panic!("expected notes, got {:?}", other),
        }
    }

    #[test]
    fn every_attached_surface_shows_the_same_records() {
        let mut store = InMemoryStore::new();
        notes::add(&mut store, "first").unwrap();

        let mut views = ViewSync::new();
        let (panel_surface, panel_seen) = recorder(PanelId::Notes);
        let (modal_surface, modal_seen) = recorder(PanelId::Notes);
        let (todo_surface, todo_seen) = recorder(PanelId::Todos);
        views.attach(panel_surface);
        views.attach(modal_surface);
        views.attach(todo_surface);

        notes::add(&mut store, "second").unwrap();
        views.render_all(&store, PanelId::Notes);

        let listed: Vec<crate::model::Note> = helpers::list_records(&store);
        let expected: Vec<Uuid> = listed.iter().map(|n| n.id).collect();

        assert_eq!(note_ids(&panel_seen.borrow()[0]), expected);
        assert_eq!(note_ids(&modal_seen.borrow()[0]), expected);
        assert!(todo_seen.borrow().is_empty());
    }

    #[test]
    fn detached_surfaces_stop_rendering() {
        let store = InMemoryStore::new();
        let mut views = ViewSync::new();
        let (surface, seen) = recorder(PanelId::Notes);
        let id = views.attach(surface);

        views.render_all(&store, PanelId::Notes);
        views.detach(id);
        views.render_all(&store, PanelId::Notes);

        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn journal_panel_renders_the_cursor_date() {
        use chrono::NaiveDate;

        let mut store = InMemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let mut logs = store.load_logs();
        logs.insert(date, "spring notes".to_string());
        store.save_logs(&logs).unwrap();

        let mut views = ViewSync::new();
        let (surface, seen) = recorder(PanelId::DailyLog);
        views.attach(surface);
        views.set_journal_date(date);
        views.render_all(&store, PanelId::DailyLog);

        match &seen.borrow()[0] {
            PanelData::Journal { date: d, content } => {
                assert_eq!(*d, date);
                assert_eq!(content, "spring notes");
            }
            other => panic!("expected journal data, got {:?}", other),
        };
    }
}
