use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{KeyValueStore, StorageError, StoreKey};

/// In-memory store. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StoreKey, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: StoreKey) -> bool {
        self.lock().contains_key(&key)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<StoreKey, Value>> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> Result<Option<Value>, StorageError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn put(&self, key: StoreKey, value: &Value) -> Result<(), StorageError> {
        self.lock().insert(key, value.clone());
        Ok(())
    }
}
