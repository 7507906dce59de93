//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_error;
pub mod auth_port;
pub mod platform;

pub use api_error::RequestError;
pub use auth_port::{AuthTokens, IdentityProviderPort, SessionBackendPort};
pub use platform::{storage_keys, ClockPort, DocumentProvider, StorageProvider};

#[cfg(test)]
pub use auth_port::{MockIdentityProviderPort, MockSessionBackendPort};
#[cfg(test)]
pub use platform::{MockClockPort, MockDocumentProvider, MockStorageProvider};
