//! Command layer: every user-visible operation is a function over a
//! [`Store`](crate::store::Store) returning a [`CmdResult`].
//!
//! Commands never print. They collect messages and data into the
//! result and leave rendering to whoever called them, which is what
//! keeps the whole layer runnable against an in-memory store in tests.

pub mod bookmarks;
pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod logs;
pub mod notes;
pub mod snippets;
pub mod theme;
pub mod todos;

use crate::config::DashConfig;
use crate::journal::LogView;
use crate::model::Theme;
use crate::view::PanelData;

/// Severity of a [`CmdMessage`]. `Info` messages only print in verbose
/// mode; the other levels always show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl CmdMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

/// What a command produced. A command fills in the slots that apply to
/// it and leaves the rest `None`; the CLI renders each filled slot.
#[derive(Debug, Clone, Default)]
pub struct CmdResult {
    /// Refreshed panel content after a listing or mutation.
    pub listed: Option<PanelData>,
    pub log: Option<LogView>,
    pub theme: Option<Theme>,
    pub config: Option<DashConfig>,
    /// Raw text for stdout, e.g. a copied snippet body.
    pub text: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listed(mut self, data: PanelData) -> Self {
        self.listed = Some(data);
        self
    }

    pub fn with_log(mut self, view: LogView) -> Self {
        self.log = Some(view);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: DashConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
