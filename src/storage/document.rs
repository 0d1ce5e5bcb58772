//! JSON encoding of whole-collection documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::{KeyValueStore, StorageError};

/// What to do when a persisted document cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Copy the document to its backup key, then keep the records that
    /// still decode.
    #[default]
    Reset,
    /// Refuse to open the store.
    Fail,
}

/// Errors raised by the schema and submission stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Stored document '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode document '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key the raw text of a malformed `key` document is copied to on reset.
pub fn backup_key(key: &str) -> String {
    format!("{key}-corrupt")
}

/// Load the JSON array stored under `key`.
///
/// An absent key is an empty collection. A malformed document is handled
/// according to `policy`.
pub fn load_document<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
    policy: CorruptPolicy,
) -> Result<Vec<T>, StoreError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };

    let source = match serde_json::from_str(&raw) {
        Ok(items) => return Ok(items),
        Err(source) => source,
    };
    if policy == CorruptPolicy::Fail {
        return Err(StoreError::Corrupt {
            key: key.to_string(),
            source,
        });
    }

    // Must land before the caller's next save replaces the document.
    let backup = backup_key(key);
    storage.set(&backup, &raw)?;

    let records: Vec<Value> = serde_json::from_str(&raw).unwrap_or_default();
    let total = records.len();
    let items: Vec<T> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();
    tracing::warn!(
        key,
        backup = %backup,
        error = %source,
        kept = items.len(),
        dropped = total - items.len(),
        "malformed document, keeping readable records"
    );
    Ok(items)
}

/// Persist the full collection under `key`.
pub fn save_document<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(items).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &raw)?;
    Ok(())
}
