//! File-backed storage: one `<key>.json` document per key.
//!
//! Writes go to a temp file that is renamed over the document while an
//! exclusive advisory lock is held on `.lock` in the same directory, so a
//! second process never reads a half-written document. There is no merge:
//! the last writer wins.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{check_key, KeyValueStore, StorageError};

const LOCK_FILE: &str = ".lock";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn lock(&self) -> Result<File, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| StorageError::Lock {
                path: path.clone(),
                source,
            })?;
        file.lock_exclusive()
            .map_err(|source| StorageError::Lock { path, source })?;
        Ok(file)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let lock = self.lock()?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        let io_err = |source| StorageError::Io {
            path: tmp.clone(),
            source,
        };

        let mut file = File::create(&tmp).map_err(io_err)?;
        file.write_all(value.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        fs::rename(&tmp, &path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        drop(lock);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }

        let lock = self.lock()?;
        let result = match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        };
        drop(lock);
        result
    }
}
