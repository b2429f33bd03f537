//! File-backed store: one JSON file per storage key inside the data
//! directory, written atomically via a temp file and rename.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{DashError, Result};
use crate::store::{StorageKey, Store};

/// Environment variable overriding the data directory. Used by the
/// integration tests and handy for keeping throwaway dashboards around.
pub const DATA_DIR_ENV: &str = "DEVDASH_DATA_DIR";

/// Resolves the data directory: the [`DATA_DIR_ENV`] override when set,
/// otherwise the platform data dir (e.g. `~/.local/share/devdash`).
pub fn default_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let dirs = ProjectDirs::from("com", "devdash", "devdash")
        .ok_or_else(|| DashError::Store("Could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `data_dir`, creating the directory if
    /// needed.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        ensure_dir(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

impl Store for FileStore {
    fn read_raw(&self, key: StorageKey) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    /// Writes to a sibling temp file first and renames it into place.
    /// A crash mid-write leaves the old document intact; rename on the
    /// same filesystem is atomic.
    fn write_raw(&mut self, key: StorageKey, json: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use tempfile::tempdir;

    #[test]
    fn creates_data_dir_and_round_trips() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");
        let mut store = FileStore::new(root.clone()).unwrap();

        let notes = vec![Note::new("on disk").unwrap()];
        store.save(&notes).unwrap();

        assert!(root.join("notes.json").exists());
        let loaded: Vec<Note> = store.load();
        assert_eq!(loaded, notes);
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store.save(&vec![Note::new("x").unwrap()]).unwrap();

        assert!(!dir.path().join("notes.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_on_disk_loads_as_empty() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store.save(&vec![Note::new("soon gone").unwrap()]).unwrap();

        fs::write(dir.path().join("notes.json"), "]oops[").unwrap();
        let loaded: Vec<Note> = store.load();
        assert!(loaded.is_empty());
    }

    #[test]
    fn env_override_wins() {
        let dir = tempdir().unwrap();
        env::set_var(DATA_DIR_ENV, dir.path());
        let resolved = default_data_dir().unwrap();
        env::remove_var(DATA_DIR_ENV);
        assert_eq!(resolved, dir.path());
    }
}
