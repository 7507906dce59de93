//! In-memory storage, scoped to the running process.
//!
//! Backs the `session` storage scope: nothing outlives the process, the same
//! way a browser's session storage dies with the tab.

use crate::ports::outbound::StorageProvider;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.values.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.values.write() {
            Ok(mut guard) => {
                guard.remove(key);
            }
            Err(e) => tracing::error!("Failed to acquire write lock for storage: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_values() {
        let storage = InMemoryStorageProvider::new();
        let other = storage.clone();
        storage.save("key", "value");
        assert_eq!(other.load("key").as_deref(), Some("value"));

        other.remove("key");
        assert!(storage.is_empty());
    }
}
