use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },
}
