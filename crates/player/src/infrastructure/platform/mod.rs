//! Platform-specific implementations
//!
//! This module provides implementations of the platform abstraction traits
//! defined in `ports/outbound/platform.rs`.

mod desktop;
mod memory;

pub use desktop::{DesktopDocumentProvider, DesktopStorageProvider, SystemClock};
pub use memory::InMemoryStorageProvider;

use std::sync::Arc;

use crate::config::StorageScope;
use crate::ports::outbound::StorageProvider;

/// Build the storage backend for the configured scope.
///
/// `local` persists to a file (at `path`, or the platform config directory);
/// `session` lives only as long as the process.
pub fn create_storage(
    scope: StorageScope,
    path: Option<&std::path::Path>,
) -> Arc<dyn StorageProvider> {
    match scope {
        StorageScope::Local => {
            let path = path
                .map(|p| p.to_path_buf())
                .unwrap_or_else(DesktopStorageProvider::default_path);
            Arc::new(DesktopStorageProvider::new(path))
        }
        StorageScope::Session => Arc::new(InMemoryStorageProvider::new()),
    }
}
