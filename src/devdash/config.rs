//! User configuration, stored as `config.json` next to the data files.
//! Loading never fails: a missing or unreadable file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILENAME: &str = "config.json";

fn default_relative_times() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashConfig {
    /// Directory export files land in when no path is given on the
    /// command line. `None` means the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// Show "2 hours ago" style timestamps in listings instead of
    /// absolute dates.
    #[serde(default = "default_relative_times")]
    pub relative_times: bool,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            relative_times: true,
        }
    }
}

impl DashConfig {
    pub fn load(dir: &Path) -> Self {
        fs::read_to_string(dir.join(CONFIG_FILENAME))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempdir().unwrap();
        let config = DashConfig::load(dir.path());
        assert_eq!(config, DashConfig::default());
        assert!(config.relative_times);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let config = DashConfig {
            export_dir: Some(PathBuf::from("/tmp/backups")),
            relative_times: false,
        };
        config.save(dir.path()).unwrap();

        assert_eq!(DashConfig::load(dir.path()), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{\"exportDir\": \"/backups\"}").unwrap();

        let config = DashConfig::load(dir.path());
        assert_eq!(config.export_dir, Some(PathBuf::from("/backups")));
        assert!(config.relative_times);
    }
}
