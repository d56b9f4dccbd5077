//! JSON file storage, one file per store key.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError, StoreKey};

/// Store that keeps each key in `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }

    pub fn exists(&self, key: StoreKey) -> bool {
        self.path(key).exists()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StoreKey) -> Result<Option<Value>, StorageError> {
        let path = self.path(key);

        match fs::read(&path) {
            Ok(bytes) => {
                let value =
                    serde_json::from_slice(&bytes).map_err(|e| StorageError::Decode(key, e))?;
                Ok(Some(value))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    /// Writes to a temporary sibling file and renames it into place.
    fn put(&self, key: StoreKey, value: &Value) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let path = self.path(key);
        let tmp_path = path.with_extension(format!("tmp.{}", uuid::Uuid::new_v4().simple()));
        let bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Encode(key, e))?;

        fs::write(&tmp_path, bytes).map_err(|e| StorageError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::Io { path, source: e })?;

        Ok(())
    }
}
