use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
