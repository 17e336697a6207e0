//! Bounded, newest-first request history persisted as a JSON array.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::composer::{HeaderRow, RequestComposer};
use crate::proxy::HttpMethod;

/// Fixed key the history is stored under (also the browser's localStorage key).
pub const HISTORY_STORAGE_KEY: &str = "fake-postman-history";

/// Maximum number of entries kept.
pub const MAX_HISTORY_ENTRIES: usize = 20;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A request that was sent successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unix timestamp in milliseconds when the request was sent.
    pub id: i64,
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HeaderRow>,
    #[serde(default)]
    pub body: String,
}

impl HistoryEntry {
    /// Snapshot of the composer, keeping header rows as typed.
    pub fn from_composer(composer: &RequestComposer, id: i64) -> Self {
        Self {
            id,
            method: composer.method,
            url: composer.url.clone(),
            headers: composer.headers.clone(),
            body: composer.body.clone(),
        }
    }
}

/// File-backed history store.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Opens the store in `data_dir`. A missing file is an empty history; an
    /// unreadable or corrupt one is logged and treated as empty.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(format!("{}.json", HISTORY_STORAGE_KEY));
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable history");
                Vec::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>, HistoryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut entries: Vec<HistoryEntry> = serde_json::from_str(&raw)?;
        entries.truncate(MAX_HISTORY_ENTRIES);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Prepends `entry`, drops anything beyond the cap, and persists.
    ///
    /// Ids strictly decrease from the head: an id not newer than the current
    /// head is moved to one past it. The entry stays in memory even when
    /// persisting fails.
    pub fn push(&mut self, mut entry: HistoryEntry) -> Result<(), HistoryError> {
        if let Some(head) = self.entries.first() {
            if entry.id <= head.id {
                entry.id = head.id + 1;
            }
        }
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        self.save()
    }

    fn save(&self) -> Result<(), HistoryError> {
        let io_err = |source: io::Error| HistoryError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, json).map_err(io_err)
    }
}
