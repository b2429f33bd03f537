//! `devdash import`: replace the whole store with a backup bundle.
//!
//! Importing is destructive, so it happens in two phases: parse the
//! file first (any problem surfaces here, with the store untouched),
//! then apply the bundle wholesale once the caller has confirmed.

use std::fs;
use std::path::Path;

use crate::commands::export::Backup;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DashError, Result};
use crate::store::Store;

/// Parses a bundle file. Nothing is written here, so a malformed file
/// leaves the store exactly as it was.
pub fn load(path: &Path) -> Result<Backup> {
    let raw = fs::read_to_string(path)
        .map_err(|e| DashError::Import(format!("could not read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| {
        DashError::Import(format!("{} is not a valid backup: {}", path.display(), e))
    })
}

/// One-line description of a bundle, shown before the confirmation.
pub fn summary(backup: &Backup) -> String {
    let mut line = format!(
        "{} notes, {} todos, {} bookmarks, {} snippets, {} log entries",
        backup.notes.len(),
        backup.todos.len(),
        backup.bookmarks.len(),
        backup.snippets.len(),
        backup.daily_logs.len(),
    );
    if let Some(date) = backup.export_date {
        line.push_str(&format!(" (exported {})", date.format("%Y-%m-%d")));
    }
    line
}

/// Replaces every stored value with the bundle's contents. Collections
/// missing from the bundle land as empty, and the theme as the default.
pub fn apply<S: Store>(store: &mut S, backup: &Backup) -> Result<CmdResult> {
    store.save(&backup.notes)?;
    store.save(&backup.todos)?;
    store.save(&backup.bookmarks)?;
    store.save(&backup.snippets)?;
    store.save_logs(&backup.daily_logs)?;
    store.save_theme(backup.theme)?;

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!("Imported {}", summary(backup))));
    Ok(result)
}
