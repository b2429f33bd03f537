//! `devdash theme` subcommands.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::Store;

pub fn show<S: Store>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::new().with_theme(store.load_theme()))
}

pub fn set<S: Store>(store: &mut S, theme: Theme) -> Result<CmdResult> {
    store.save_theme(theme)?;
    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    Ok(result.with_theme(theme))
}

pub fn toggle<S: Store>(store: &mut S) -> Result<CmdResult> {
    let next = store.load_theme().toggle();
    set(store, next)
}
