//! Error type shared by the memento store and its file layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, mutating or persisting mementos.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse mementos file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize mementos for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Memento {id} does not exist")]
    NotFound { id: u64 },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Could not determine the home directory; use -f to point at a mementos file")]
    HomeDirUnavailable,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        StoreError::InvalidArgument(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
