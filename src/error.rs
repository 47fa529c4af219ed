use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is a directory, expected a file", path.display())]
    IsDirectory { path: PathBuf },

    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EnrichError>;
