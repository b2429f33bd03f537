//! devdash: a personal dashboard as a library, with a thin CLI on top.
//!
//! Notes, todos, bookmarks, code snippets, and a daily journal, all
//! stored locally as JSON and searchable from one place.
//!
//! # Architecture
//!
//! The code is layered so that everything below the binary is UI-free
//! and runs against an in-memory store in tests:
//!
//! ```text
//! binary (main.rs + cli/)      parsing, printing, interactive sessions
//!         |
//! api::DashApi<S: Store>       one facade over every operation
//!         |
//! commands::*                  fn(store, args) -> Result<CmdResult>
//!         |
//! store::Store                 FileStore on disk, InMemoryStore in tests
//! ```
//!
//! Commands never print; they return a [`commands::CmdResult`] holding
//! data and leveled messages, and the CLI decides how to render it.
//! Rendered surfaces register with [`view::ViewSync`] so one mutation
//! refreshes every view of the affected panel from a single load.
//!
//! Loads are deliberately infallible: a corrupt data file yields that
//! key's empty default instead of an error, and the other keys are
//! unaffected. See [`store`] for the contract.

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod init;
pub mod journal;
pub mod model;
pub mod search;
pub mod store;
pub mod view;

pub use api::DashApi;
pub use error::{DashError, Result};
