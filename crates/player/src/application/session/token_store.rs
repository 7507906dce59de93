//! Token persistence
//!
//! Each session field lives under its own storage key as a JSON literal
//! (`"abc"` for strings, `1700000000000` for the expiry). A missing or
//! undecodable key reads back as the field's default, and writing a default
//! value removes the key.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Everything persisted for a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: Option<String>,
    /// Milliseconds since the Unix epoch; 0 when unknown
    pub expires_at: i64,
}

impl StoredSession {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn StorageProvider>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> StoredSession {
        StoredSession {
            access_token: self.read(storage_keys::ACCESS_TOKEN),
            id_token: self.read(storage_keys::ID_TOKEN),
            refresh_token: self
                .read::<Option<String>>(storage_keys::REFRESH_TOKEN)
                .filter(|token| !token.is_empty()),
            expires_at: self.read(storage_keys::EXPIRES_AT),
        }
    }

    pub fn save(&self, session: &StoredSession) {
        self.write(
            storage_keys::ACCESS_TOKEN,
            &session.access_token,
            session.access_token.is_empty(),
        );
        self.write(
            storage_keys::ID_TOKEN,
            &session.id_token,
            session.id_token.is_empty(),
        );
        self.write(
            storage_keys::REFRESH_TOKEN,
            &session.refresh_token,
            session.refresh_token.as_deref().unwrap_or_default().is_empty(),
        );
        self.write(
            storage_keys::EXPIRES_AT,
            &session.expires_at,
            session.expires_at == 0,
        );
    }

    pub fn clear(&self) {
        for key in storage_keys::SESSION_KEYS {
            self.storage.remove(key);
        }
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.storage.load(key) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Ignoring undecodable stored value");
            T::default()
        })
    }

    fn write<T: Serialize>(&self, key: &str, value: &T, is_empty: bool) {
        if is_empty {
            self.storage.remove(key);
            return;
        }
        match serde_json::to_string(value) {
            Ok(json) => {
                tracing::debug!(key, "Storing session value");
                self.storage.save(key, &json);
            }
            Err(e) => tracing::warn!(key, error = %e, "Failed to encode session value"),
        }
    }
}
