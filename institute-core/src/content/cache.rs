// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local cache for section documents
//!
//! A string-keyed, string-valued store used as the resolver's second source
//! and as the persister's save-time mirror. The file-backed cache uses
//! atomic writes to prevent partial files on crash/interruption.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use thiserror::Error;

use super::integrity::{seal, unseal, IntegrityError};

/// Keyed string store shared by the resolver and the persister
pub trait LocalCache: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove the value stored under `key` (absent keys are not an error)
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// File-backed cache, one checksummed file per key
pub struct FileCache {
    cache_dir: PathBuf,
}

impl FileCache {
    /// Create a new file cache at the given storage path
    ///
    /// Creates a `content/` subdirectory if it doesn't exist.
    pub fn new(storage_path: &Path) -> Result<Self, CacheError> {
        let cache_dir = storage_path.join("content");
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    /// Directory holding the cache files
    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, CacheError> {
        validate_key(key)?;
        Ok(self.cache_dir.join(format!("{}.json", key)))
    }
}

impl LocalCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.entry_path(key)?;
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match unseal(&data) {
            Ok(value) => Ok(Some(value.to_string())),
            Err(IntegrityError::Unsealed) => Err(CacheError::Malformed(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        atomic_write(&path, seal(value).as_bytes())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process cache (tests, ephemeral sessions)
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryCache {
    /// Create an empty memory cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject all writes, as a browser does when storage quota is exhausted
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LocalCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(CacheError::WriteRejected("storage quota exceeded".into()));
        }
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().map_err(|_| CacheError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Keys become file names, so only a conservative charset is accepted
fn validate_key(key: &str) -> Result<(), CacheError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(CacheError::InvalidKey(key.to_string()))
    }
}

/// Atomic file write (write to temp, then rename)
///
/// This ensures that the file is never in a partial state - either the
/// old content remains or the new content is fully written.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Errors that can occur with the local cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Integrity verification failed
    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// Entry is not in the expected layout
    #[error("Malformed cache entry: {0}")]
    Malformed(String),

    /// Key cannot be used as a cache entry name
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// The store refused the write
    #[error("Cache write rejected: {0}")]
    WriteRejected(String),

    /// A previous holder of the cache lock panicked
    #[error("Cache lock poisoned")]
    Poisoned,
}
