//! Durable client-side preference storage.
//!
//! The locale manager persists exactly one value: the raw language code under
//! [`PREFERENCE_KEY`]. Stores are plain key/value maps so the same trait can
//! back a browser-like local storage, a JSON file or an in-memory map in tests.

use crate::error::StorageError;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Namespaced key under which the language preference is stored.
pub const PREFERENCE_KEY: &str = "dashboard:locale";

/// Key/value storage that survives across sessions.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ==================== In-memory Store ====================

/// In-memory store, optionally limited to a byte quota like browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys plus values, in bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Seed a value, bypassing the quota.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        lock(&self.values).insert(key.to_string(), value.to_string());
        self
    }

    /// Current value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = lock(&self.values);

        if let Some(quota) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let used = others + key.len() + value.len();
            if used > quota {
                return Err(StorageError::QuotaExceeded { used, quota });
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ==================== File Store ====================

/// JSON object on disk, one entry per key.
///
/// The whole file is rewritten on every write; it only ever holds a handful
/// of small preferences. Writes go to a sibling staging file that is then
/// renamed over the target, so a crash mid-write leaves the old file intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Sibling path the next write is staged in.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut values = self.load()?;
        Ok(values.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // An unreadable file must not block every later write.
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StorageError::Corrupt(e)) => {
                warn!(
                    "Replacing unreadable preferences file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&values)?;
        let staging = self.staging_path();
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)?;
        debug!("Wrote preference '{}' to {}", key, self.path.display());
        Ok(())
    }
}

// ==================== Unavailable Store ====================

/// Store for environments without durable storage.
///
/// Every read and write fails, which the manager treats as "no preference".
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PreferenceStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStore Tests ====================

    #[test]
    fn test_memory_store_empty_read() {
        let store = MemoryStore::new();
        assert_eq!(store.read(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_memory_store_write_then_read() {
        let store = MemoryStore::new();
        store.write(PREFERENCE_KEY, "en").unwrap();
        assert_eq!(store.read(PREFERENCE_KEY).unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryStore::new().with_value(PREFERENCE_KEY, "en");
        store.write(PREFERENCE_KEY, "ar").unwrap();
        assert_eq!(store.get(PREFERENCE_KEY), Some("ar".to_string()));
    }

    #[test]
    fn test_memory_store_quota_exceeded() {
        let store = MemoryStore::with_quota(4);
        let result = store.write(PREFERENCE_KEY, "en");
        assert!(matches!(result, Err(StorageError::QuotaExceeded { quota: 4, .. })));
        assert_eq!(store.get(PREFERENCE_KEY), None);
    }

    #[test]
    fn test_memory_store_quota_counts_replacement_once() {
        let quota = PREFERENCE_KEY.len() + 2;
        let store = MemoryStore::with_quota(quota);
        store.write(PREFERENCE_KEY, "en").unwrap();
        store.write(PREFERENCE_KEY, "ar").unwrap();
        assert_eq!(store.get(PREFERENCE_KEY), Some("ar".to_string()));
    }

    // ==================== FileStore Tests ====================

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.read(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStore::new(&path).write(PREFERENCE_KEY, "ar").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.read(PREFERENCE_KEY).unwrap(), Some("ar".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        store.write("dashboard:theme", "dark").unwrap();
        store.write(PREFERENCE_KEY, "en").unwrap();

        assert_eq!(store.read("dashboard:theme").unwrap(), Some("dark".to_string()));
        assert_eq!(store.read(PREFERENCE_KEY).unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_file_store_stores_raw_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        FileStore::new(&path).write(PREFERENCE_KEY, "id").unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json[PREFERENCE_KEY], "id");
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileStore::new(&path).read(PREFERENCE_KEY);
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_file_store_write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"dashboard:locale": "e"#).unwrap();

        let store = FileStore::new(&path);
        store.write(PREFERENCE_KEY, "en").unwrap();

        assert_eq!(store.read(PREFERENCE_KEY).unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_file_store_write_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::new(&path);

        store.write(PREFERENCE_KEY, "ar").unwrap();
        store.write(PREFERENCE_KEY, "id").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
    }

    #[test]
    fn test_file_store_empty_file_reads_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "").unwrap();
        assert_eq!(FileStore::new(&path).read(PREFERENCE_KEY).unwrap(), None);
    }

    // ==================== UnavailableStore Tests ====================

    #[test]
    fn test_unavailable_store_fails_both_ways() {
        let store = UnavailableStore::new("private browsing");
        assert!(matches!(store.read(PREFERENCE_KEY), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            store.write(PREFERENCE_KEY, "en"),
            Err(StorageError::Unavailable(reason)) if reason == "private browsing"
        ));
    }
}
