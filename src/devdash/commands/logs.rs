//! `devdash log` one-shot subcommands: show or write a single entry.
//! The interactive editor in the CLI drives [`LogNavigator`] directly.

use chrono::NaiveDate;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::{LogNavigator, SaveOutcome};
use crate::store::Store;

fn navigator_for(date: Option<NaiveDate>) -> LogNavigator {
    match date {
        Some(d) => LogNavigator::new(d),
        None => LogNavigator::at_today(),
    }
}

pub fn show<S: Store>(store: &S, date: Option<NaiveDate>) -> Result<CmdResult> {
    let navigator = navigator_for(date);
    Ok(CmdResult::new().with_log(navigator.load(store)))
}

/// Writes `content` under the given date, today by default. Autosaves
/// stay quiet; only manual saves confirm.
pub fn save<S: Store>(
    store: &mut S,
    date: Option<NaiveDate>,
    content: &str,
    autosave: bool,
) -> Result<CmdResult> {
    let navigator = navigator_for(date);
    let outcome = navigator.save(store, content)?;
    let mut result = CmdResult::new();
    if !autosave {
        match outcome {
            SaveOutcome::Stored => result.add_message(CmdMessage::success("Saved ✓")),
            SaveOutcome::Removed => result.add_message(CmdMessage::info(format!(
                "Cleared the entry for {}",
                navigator.cursor()
            ))),
        }
    }
    Ok(result.with_log(navigator.load(store)))
}
