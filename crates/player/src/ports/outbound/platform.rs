//! Platform abstraction ports
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations

use chrono::{DateTime, Utc};

/// Current time, injectable for expiry checks.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Persistent key-value storage abstraction (local/session scoped)
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Document operations (page title, etc.)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentProvider: Send + Sync {
    /// Set the page title shown for the current route
    fn set_page_title(&self, title: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const ACCESS_TOKEN: &str = "ttrpgz_access_token";
    pub const ID_TOKEN: &str = "ttrpgz_id_token";
    pub const REFRESH_TOKEN: &str = "ttrpgz_refresh_token";
    pub const EXPIRES_AT: &str = "ttrpgz_expires_at";

    /// Every key that belongs to the session.
    pub const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN, ID_TOKEN, REFRESH_TOKEN, EXPIRES_AT];
}
