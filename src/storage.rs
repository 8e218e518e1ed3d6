//! Persistent key/value storage for UI preferences.
//!
//! The only value stored is the theme preference, but the interface keeps
//! the shape of the browser's `localStorage`: string keys to string values,
//! reads never fail, writes may.

use log::warn;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object on disk, rewritten on every `set_item`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object is
    /// logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => parse_items(&path, &contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_items(path: &Path, contents: &str) -> BTreeMap<String, String> {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            warn!("{} is not a JSON object, starting empty", path.display());
            BTreeMap::new()
        }
        Err(e) => {
            warn!("Failed to parse {}: {e}. Starting empty.", path.display());
            BTreeMap::new()
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("theme"), None);
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn file_storage_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::open(tmp.path().join("storage.json")).unwrap();
        assert_eq!(storage.get_item("theme"), None);
    }

    #[test]
    fn file_storage_persists_across_opens() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/storage.json");

        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item("theme", "dark").unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn file_storage_invalid_json_starts_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("theme"), None);
        storage.set_item("theme", "light").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains(r#""theme": "light""#));
    }

    #[test]
    fn file_storage_skips_non_string_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        fs::write(&path, r#"{"theme": "dark", "count": 3}"#).unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(storage.get_item("count"), None);
    }
}
