//! Storage backends: named JSON documents over memory or disk.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;

/// A durable key-value store of named JSON documents.
///
/// Reads and writes are synchronous and complete before returning; a write
/// replaces the whole document under its name.
pub trait Storage: Send + Sync {
    /// Read the document under `name`, or `None` if it was never written.
    fn read_document(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the document under `name`.
    fn write_document(&self, name: &str, contents: &str) -> Result<(), StoreError>;

    /// Remove the document under `name`. Removing an absent document is a
    /// no-op.
    fn delete_document(&self, name: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Volatile backend for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Unavailable("storage lock poisoned".into()))
    }
}

impl Storage for MemoryStorage {
    fn read_document(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn write_document(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        self.lock()?.insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn delete_document(&self, name: &str) -> Result<(), StoreError> {
        self.lock()?.remove(name);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// On-disk backend
// ---------------------------------------------------------------------------

/// One `<name>.json` file per document under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|err| StoreError::Unavailable(format!("cannot create {dir:?}: {err}")))?;
        Ok(FileStorage { dir })
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn read_document(&self, name: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.document_path(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Unavailable(format!(
                "cannot read document '{name}': {err}"
            ))),
        }
    }

    fn write_document(&self, name: &str, contents: &str) -> Result<(), StoreError> {
        std::fs::write(self.document_path(name), contents).map_err(|err| {
            StoreError::Unavailable(format!("cannot write document '{name}': {err}"))
        })
    }

    fn delete_document(&self, name: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.document_path(name)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Unavailable(format!(
                "cannot delete document '{name}': {err}"
            ))),
        }
    }
}
