//! Durable key-value slots for persisted catalogs.
//!
//! A `ThemeStorage` maps a string key to an opaque byte blob. The catalog
//! owns the encoding; backends only move bytes.
//!
//! - `MemoryStorage`: in-process map, for tests and embedding
//! - `FileStorage`: one file per key under a directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode themes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A place to keep serialized theme lists.
pub trait ThemeStorage {
    /// Read the blob stored under `key`. `Ok(None)` when nothing is stored.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob stored under `key`.
    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: FxHashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw bytes under a key, bypassing any catalog.
    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.slots.insert(key.into(), data.into());
    }

    /// Raw bytes under a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.slots.get(key).map(Vec::as_slice)
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

/// File-backed storage: each key is a JSON file in `dir`.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written list.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store files under `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store files under the platform data directory (`<data_dir>/memorize`).
    ///
    /// Returns `None` when the platform has no data directory.
    #[must_use]
    pub fn in_default_dir() -> Option<Self> {
        default_dir().map(Self::new)
    }

    /// Directory holding the files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

impl ThemeStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, data)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}

/// Default directory for file storage.
#[must_use]
pub fn default_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("memorize"))
}

/// Map a storage key to a portable file name.
///
/// ASCII letters, digits and `-` are kept. Every other byte of the UTF-8
/// key is written as `%XX`, so distinct keys never share a file.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}
