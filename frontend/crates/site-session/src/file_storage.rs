use crate::{Storage, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Entries = BTreeMap<String, String>;

/// Distinguishes temp files of concurrent writes within one process.
static WRITE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Local storage persisted as one JSON object of string values.
///
/// Every operation re-reads the file, so separate processes sharing it see
/// each other's writes on their next read. There is no locking: the last
/// writer wins. Each write goes through its own temp file, so concurrent
/// writers never clobber a half-written file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backs up a corrupted storage file for debugging.
    ///
    /// Renames `<file>` to `<file>.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StorageResult<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling(&format!("corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path).map_err(StorageError::backup_failed)?;

        warn!("Backed up corrupted local storage to {backup_path:?}");
        Ok(Some(backup_path))
    }

    /// Reads all entries. `None` when the file does not exist yet.
    fn read_entries(&self) -> StorageResult<Option<Entries>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::file_read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(Some(Entries::new()));
        }

        serde_json::from_str::<Entries>(&contents)
            .map(Some)
            .map_err(|e| StorageError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Entries to start a write from. A corrupted file is moved aside first.
    fn entries_for_update(&self) -> StorageResult<Entries> {
        match self.read_entries() {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(StorageError::Corrupted { message, .. }) => {
                self.discard_corrupted(&message)?;
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn discard_corrupted(&self, message: &str) -> StorageResult<()> {
        warn!(
            "Local storage at {:?} corrupted ({message}), starting fresh",
            self.path
        );
        self.backup_corrupted().map(|_| ())
    }

    /// Writes all entries using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn write_entries(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StorageError::dir_creation(dir.to_path_buf(), e))?;
        }

        let write_id = WRITE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_path = self.sibling(&format!("tmp.{}.{write_id}", std::process::id()));
        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        debug!("Wrote {} local storage entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// `<file>.<suffix>` next to the storage file.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("storage"));
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self
            .read_entries()?
            .and_then(|mut entries| entries.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self.read_entries() {
            Ok(None) => Ok(()),
            Ok(Some(mut entries)) => {
                if entries.remove(key).is_some() {
                    self.write_entries(&entries)
                } else {
                    Ok(())
                }
            }
            Err(StorageError::Corrupted { message, .. }) => {
                self.discard_corrupted(&message)?;
                self.write_entries(&Entries::new())
            }
            Err(e) => Err(e),
        }
    }
}
