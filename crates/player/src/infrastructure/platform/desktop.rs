//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::{ClockPort, DocumentProvider, StorageProvider};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// System clock - uses real time.
#[derive(Clone, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/ttrpgz/player/storage.json
/// - macOS: ~/Library/Application Support/io.ttrpgz.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\ttrpgz\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl DesktopStorageProvider {
    /// Platform config directory location for the storage file.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "ttrpgz", "player") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("ttrpgz_storage.json")
        }
    }

    /// Create a storage provider backed by the given file.
    ///
    /// Loads existing data from the file if it exists. An unreadable or
    /// corrupt file starts an empty store.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = load_file(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::error!("Failed to create storage directory: {}", e);
                    return;
                }
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

fn load_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            HashMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                let existed = guard.remove(key).is_some();
                drop(guard);
                if existed {
                    self.persist();
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop document provider
///
/// There is no browser tab to retitle, so the title is logged and kept for
/// whoever renders the current page.
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider {
    title: Arc<RwLock<String>>,
}

impl DesktopDocumentProvider {
    pub fn title(&self) -> String {
        self.title
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        tracing::debug!(title, "Page title set");
        match self.title.write() {
            Ok(mut guard) => *guard = title.to_string(),
            Err(e) => tracing::error!("Failed to acquire write lock for title: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::new(&path);
        storage.save("ttrpgz_id_token", "\"abc\"");
        assert!(path.exists());

        let reopened = DesktopStorageProvider::new(&path);
        assert_eq!(reopened.load("ttrpgz_id_token").as_deref(), Some("\"abc\""));
    }

    #[test]
    fn remove_deletes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::new(&path);
        storage.save("a", "1");
        storage.save("b", "2");
        storage.remove("a");

        let reopened = DesktopStorageProvider::new(&path);
        assert_eq!(reopened.load("a"), None);
        assert_eq!(reopened.load("b").as_deref(), Some("2"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::new(&path);
        assert_eq!(storage.load("anything"), None);
    }

    #[test]
    fn document_provider_remembers_last_title() {
        let document = DesktopDocumentProvider::default();
        document.set_page_title("Character | TTRPGZ");
        assert_eq!(document.title(), "Character | TTRPGZ");
    }
}
