//! Durable key-value storage for the persisted documents.
//!
//! Two logical keys are used by the crate: [`FORMS_KEY`] holds the JSON
//! array of form schemas and [`SUBMISSIONS_KEY`] holds the JSON array of
//! submissions. Backends only deal in strings; encoding lives in
//! [`document`].

mod document;
mod error;
mod file;
mod memory;

use std::sync::Arc;

pub use document::{backup_key, load_document, save_document, CorruptPolicy, StoreError};
pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key under which the form schemas are persisted.
pub const FORMS_KEY: &str = "forms";

/// Key under which the submissions are persisted.
pub const SUBMISSIONS_KEY: &str = "formData";

/// String key-value backend.
///
/// Every call is a complete, synchronous operation: `set` must not return
/// before the value is durable in the backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Backend handle shared by the schema and submission stores.
pub type SharedStorage = Arc<dyn KeyValueStore>;

pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
