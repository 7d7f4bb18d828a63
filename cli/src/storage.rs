//! JSON-file session storage.
//!
//! The file holds a flat `{ "userToken": "...", "userType": "Student" }`
//! object, the same keys the browser keeps in `localStorage`. A missing or
//! unreadable file reads as empty; the file is removed once its last key is.

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use portal::{Storage, StorageError};

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

    fn load(&self) -> BTreeMap<String, String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if items.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(StorageError::Write(e.to_string())),
                _ => Ok(()),
            };
        }
        let rendered = serde_json::to_string_pretty(items).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, rendered).map_err(|e| StorageError::Write(e.to_string()))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load();
        items.insert(key.to_owned(), value.to_owned());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load();
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.save(&items)
    }
}
