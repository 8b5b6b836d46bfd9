// core/src/storage.rs

//! Client-side persisted state.
//!
//! The storefront keeps its cart and sign-in session in a small keyed
//! string store, the same shape browser `localStorage` gives the web
//! storefront. Everything above this module goes through the [`KeyValueStore`]
//! seam, so tests and ephemeral tools can swap the file for memory.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("I/O failure on state file {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error("Failed to encode persisted state: {0}")]
  Encode(#[from] serde_json::Error),
}

/// Keyed string persistence.
///
/// `get` is infallible by design: missing or unreadable values surface as
/// `None` and are handled by each consumer (a corrupt cart loads as an
/// empty bag, a corrupt session as signed-out). Writes report failures so
/// mutations can refuse to commit.
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
  fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// A single JSON object file (`{"key": "value", ...}`), written through on
/// every mutation.
pub struct JsonFileStore {
  path: PathBuf,
  entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
  /// Opens (or lazily creates) the state file.
  ///
  /// A file holding invalid JSON is treated as empty state rather than an
  /// error; it will be overwritten by the next write.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
    let path = path.into();
    let entries = match fs::read_to_string(&path) {
      Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
        Ok(map) => map,
        Err(err) => {
          warn!(path = %path.display(), error = %err, "State file is not valid JSON; starting from empty state");
          HashMap::new()
        }
      },
      Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
      Err(err) => {
        return Err(StorageError::Io {
          path: path.display().to_string(),
          source: err,
        })
      }
    };

    Ok(Self {
      path,
      entries: RwLock::new(entries),
    })
  }

  fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
          path: parent.display().to_string(),
          source,
        })?;
      }
    }
    let raw = serde_json::to_string_pretty(entries)?;
    fs::write(&self.path, raw).map_err(|source| StorageError::Io {
      path: self.path.display().to_string(),
      source,
    })
  }
}

impl KeyValueStore for JsonFileStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }

  fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
    let mut entries = self.entries.write();
    entries.insert(key.to_string(), value.to_string());
    self.flush(&entries)
  }

  fn remove(&self, key: &str) -> Result<(), StorageError> {
    let mut entries = self.entries.write();
    if entries.remove(key).is_some() {
      self.flush(&entries)?;
    }
    Ok(())
  }
}

/// In-memory store for tests and one-shot tooling.
#[derive(Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self.entries.read().get(key).cloned()
  }

  fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StorageError> {
    self.entries.write().remove(key);
    Ok(())
  }
}
