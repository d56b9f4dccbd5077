//! Key-value persistence for application state.
//!
//! Each entity (favourites, weekly plan, each preference) is stored as one
//! JSON value under its own [`StoreKey`]. Reads and writes always move the
//! whole value; there are no partial updates and no cross-key transactions.
//!
//! Two stores are provided:
//! - [`FileStore`]: one `<key>.json` file per entity in a data directory
//! - [`MemoryStore`]: process-local map, for tests and throwaway sessions

mod file_store;
mod key;
mod memory_store;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::PathBuf;

pub use file_store::FileStore;
pub use key::StoreKey;
pub use memory_store::MemoryStore;

/// Durable storage for JSON values keyed by entity.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: StoreKey) -> Result<Option<Value>, StorageError>;

    /// Replaces the value stored under `key`.
    fn put(&self, key: StoreKey, value: &Value) -> Result<(), StorageError>;

    fn get_as<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StorageError::Decode(key, e)),
            None => Ok(None),
        }
    }

    fn put_as<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| StorageError::Encode(key, e))?;
        self.put(key, &value)
    }
}

impl<S: KeyValueStore> KeyValueStore for &S {
    fn get(&self, key: StoreKey) -> Result<Option<Value>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: StoreKey, value: &Value) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stored value for '{0}' is not valid: {1}")]
    Decode(StoreKey, #[source] serde_json::Error),
    #[error("failed to encode value for '{0}': {1}")]
    Encode(StoreKey, #[source] serde_json::Error),
}
