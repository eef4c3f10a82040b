//! History storage
//!
//! A JSON object on disk mapping history keys to [`StarterOption`]s. The whole
//! object is loaded on open and rewritten on every [`HistoryStorage::set`].
//! There is no locking: concurrent processes race and the last writer wins.
//! Entries are never evicted.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::starter::StarterOption;
use crate::error::StorageError;

/// File name of the history storage inside the config directory
pub const STORAGE_FILE_NAME: &str = "starter-option-storage.json";

const EMPTY_CONTENT: &[u8] = b"{}";

/// How the storage file was found when it was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No file existed; an empty one was created
    Created,
    /// Existing content was loaded
    Loaded,
    /// Existing content could not be decoded and was discarded.
    /// `rewritten` tells whether `{}` was written back successfully.
    Reset { rewritten: bool },
}

/// Persistent mapping from history key to starter option
#[derive(Debug)]
pub struct HistoryStorage {
    path: PathBuf,
    content: BTreeMap<String, StarterOption>,
    load_state: LoadState,
}

impl HistoryStorage {
    /// Open the storage at `path`
    ///
    /// A missing file is created empty (zero bytes). Malformed content is not
    /// an error: the storage starts empty and `{}` is written back on a best
    /// effort basis.
    ///
    /// # Errors
    /// Returns [`StorageError::Io`] if the file cannot be created or read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::File::create(&path).map_err(|e| StorageError::io(&path, e))?;
                log::debug!("created history storage at {}", path.display());
                return Ok(Self {
                    path,
                    content: BTreeMap::new(),
                    load_state: LoadState::Created,
                });
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        // Only the first JSON value counts; bytes after it are ignored
        let decoded = serde_json::Deserializer::from_slice(&raw)
            .into_iter::<BTreeMap<String, StarterOption>>()
            .next();

        match decoded {
            Some(Ok(content)) => {
                log::debug!(
                    "loaded {} history entries from {}",
                    content.len(),
                    path.display()
                );
                Ok(Self {
                    path,
                    content,
                    load_state: LoadState::Loaded,
                })
            }
            Some(Err(decode_err)) => Ok(Self::reset(path, &decode_err)),
            None => Ok(Self::reset(path, &"file is empty")),
        }
    }

    fn reset(path: PathBuf, reason: &dyn std::fmt::Display) -> Self {
        let rewritten = fs::write(&path, EMPTY_CONTENT).is_ok();
        log::warn!(
            "history storage {} is malformed ({reason}); starting empty (rewritten: {rewritten})",
            path.display()
        );
        Self {
            path,
            content: BTreeMap::new(),
            load_state: LoadState::Reset { rewritten },
        }
    }

    /// Look up the starter option stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StarterOption> {
        self.content.get(key)
    }

    /// Insert or replace the entry for `key` and rewrite the whole file
    ///
    /// The in-memory entry is updated even when writing fails.
    ///
    /// # Errors
    /// Returns [`StorageError`] if the file cannot be opened or written
    pub fn set(&mut self, key: impl Into<String>, option: StarterOption) -> Result<(), StorageError> {
        let key = key.into();
        log::debug!("storing history entry {key}");
        self.content.insert(key, option);
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let mut serialized = serde_json::to_vec_pretty(&self.content)?;
        serialized.push(b'\n');

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| StorageError::io(&self.path, e))?;

        file.write_all(&serialized)
            .map_err(|e| StorageError::io(&self.path, e))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How the backing file was found when the storage was opened
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the storage holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
