//! Startup wiring for the binary: resolve the data directory, open the
//! file store, load the config.

use std::path::PathBuf;

use crate::api::DashApi;
use crate::config::DashConfig;
use crate::error::Result;
use crate::store::fs::default_data_dir;
use crate::store::FileStore;

pub struct DashContext {
    pub api: DashApi<FileStore>,
    pub config: DashConfig,
    pub data_dir: PathBuf,
}

pub fn initialize() -> Result<DashContext> {
    let data_dir = default_data_dir()?;
    let store = FileStore::new(data_dir.clone())?;
    let config = DashConfig::load(&data_dir);
    Ok(DashContext {
        api: DashApi::new(store),
        config,
        data_dir,
    })
}
