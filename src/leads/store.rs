//! Append-only lead storage.
//!
//! The lead document is a single JSON array of records. Appends are a full
//! read-modify-write of that document, serialized behind one mutex per store
//! so concurrent submissions in this process cannot lose each other.
//!
//! Entries are carried through a write as raw JSON, so an entry this version
//! cannot read as a [`LeadRecord`] is still written back unchanged. Only a
//! document whose top level is not an array counts as corrupt.
//!
//! # Write Path
//!
//! ```text
//! append(record)
//!     │
//!     ├── lock()                      one writer at a time
//!     ├── read()                      missing / not an array → []
//!     ├── push(record)
//!     └── persist()
//!             ├── NamedTempFile::new_in(parent)
//!             ├── write pretty JSON + fsync
//!             ├── rename over the document (all-or-nothing)
//!             └── fsync parent directory (unix)
//! ```

use super::LeadRecord;
use crate::log;
use parking_lot::Mutex;
use serde_json::Value;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Failure to durably persist the lead document.
///
/// Reads never fail: an unreadable document is treated as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write lead document `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode lead document")]
    Encode(#[from] serde_json::Error),
}

/// Ordered, append-only sequence of lead records.
pub trait LeadStore: Send + Sync {
    /// Every record in insertion order; empty if nothing is stored yet.
    fn load_all(&self) -> Vec<LeadRecord>;

    /// Add `record` after all existing records.
    fn append(&self, record: LeadRecord) -> Result<(), StoreError>;
}

// ============================================================================
// JSON File Store
// ============================================================================

/// Lead store backed by a pretty-printed JSON array on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document as an empty array if it does not exist.
    ///
    /// Returns `true` if a new document was written.
    pub fn init(&self) -> Result<bool, StoreError> {
        let _guard = self.lock.lock();
        if self.path.exists() {
            return Ok(false);
        }
        self.persist(&[])?;
        Ok(true)
    }

    /// Raw document entries, or an empty list if the document is unusable.
    fn read(&self) -> Vec<Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log!("leads"; "cannot read {}: {err}, treating as empty", self.path.display());
                return Vec::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            log!("leads"; "{} is not a list of leads ({err}), treating as empty", self.path.display());
            Vec::new()
        })
    }

    /// Atomically replace the document with `entries`.
    fn persist(&self, entries: &[Value]) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let write_err = |err: std::io::Error| StoreError::Write(self.path.clone(), err);

        fs::create_dir_all(parent).map_err(write_err)?;

        let content = serde_json::to_string_pretty(entries)?;
        let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp_file.write_all(content.as_bytes()).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;
        temp_file.persist(&self.path).map_err(|err| write_err(err.error))?;

        // Make the rename itself durable
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(write_err)?;
            dir.sync_all().map_err(write_err)?;
        }

        Ok(())
    }
}

impl LeadStore for JsonFileStore {
    fn load_all(&self) -> Vec<LeadRecord> {
        // The document is only ever replaced by rename, so no lock is needed
        // to avoid seeing a partial write.
        self.read().iter().filter_map(LeadRecord::from_entry).collect()
    }

    fn append(&self, record: LeadRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.read();
        entries.push(serde_json::to_value(&record)?);
        self.persist(&entries)
    }
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Lead store kept entirely in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<LeadRecord>>,
}

#[cfg(test)]
impl LeadStore for MemoryStore {
    fn load_all(&self) -> Vec<LeadRecord> {
        self.records.lock().clone()
    }

    fn append(&self, record: LeadRecord) -> Result<(), StoreError> {
        self.records.lock().push(record);
        Ok(())
    }
}
