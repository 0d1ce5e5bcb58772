use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{check_key, KeyValueStore, StorageError};

/// In-process backend. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. a hand-written document in tests.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.entries.lock().remove(key);
        Ok(())
    }
}
