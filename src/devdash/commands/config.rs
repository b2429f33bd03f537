//! `devdash config` subcommands. Settings are few enough that they are
//! addressed by name rather than generically.

use std::path::{Path, PathBuf};

use crate::commands::{CmdMessage, CmdResult};
use crate::config::DashConfig;
use crate::error::{DashError, Result};

pub const KEYS: [&str; 2] = ["export-dir", "relative-times"];

pub fn show(config: &DashConfig) -> Result<CmdResult> {
    Ok(CmdResult::new().with_config(config.clone()))
}

pub fn get(config: &DashConfig, key: &str) -> Result<CmdResult> {
    let value = match key {
        "export-dir" => config
            .export_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(current directory)".to_string()),
        "relative-times" => config.relative_times.to_string(),
        other => return Err(unknown_key(other)),
    };
    Ok(CmdResult::new().with_text(value))
}

/// Updates one setting and writes the config file back.
pub fn set(config: &mut DashConfig, dir: &Path, key: &str, value: &str) -> Result<CmdResult> {
    match key {
        "export-dir" => {
            if value == "none" {
                config.export_dir = None;
            } else {
                config.export_dir = Some(PathBuf::from(value));
            }
        }
        "relative-times" => {
            config.relative_times = value.parse().map_err(|_| {
                DashError::Api(format!("'{}' is not a boolean (true or false)", value))
            })?;
        }
        other => return Err(unknown_key(other)),
    }
    config.save(dir)?;
    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
    Ok(result.with_config(config.clone()))
}

fn unknown_key(key: &str) -> DashError {
    DashError::Api(format!(
        "Unknown setting '{}' (known settings: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_writes_the_file() {
        let dir = tempdir().unwrap();
        let mut config = DashConfig::default();

        set(&mut config, dir.path(), "relative-times", "false").unwrap();
        assert!(!config.relative_times);

        let reloaded = DashConfig::load(dir.path());
        assert!(!reloaded.relative_times);
    }

    #[test]
    fn export_dir_can_be_cleared() {
        let dir = tempdir().unwrap();
        let mut config = DashConfig::default();

        set(&mut config, dir.path(), "export-dir", "/backups").unwrap();
        assert_eq!(config.export_dir, Some(PathBuf::from("/backups")));

        set(&mut config, dir.path(), "export-dir", "none").unwrap();
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let mut config = DashConfig::default();
        assert!(set(&mut config, dir.path(), "colour", "mauve").is_err());
        assert!(get(&config, "colour").is_err());
    }

    #[test]
    fn bad_boolean_is_rejected() {
        let dir = tempdir().unwrap();
        let mut config = DashConfig::default();
        assert!(set(&mut config, dir.path(), "relative-times", "yep").is_err());
    }
}
