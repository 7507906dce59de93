//! HTTP adapters for the identity provider and the application backend.

pub mod cognito;
pub mod request;
pub mod session_api;

#[cfg(test)]
pub(crate) mod test_support;

pub use cognito::{CognitoClient, DEFAULT_CLIENT_ID, DEFAULT_COGNITO_URL};
pub use request::{build_client, read_json, send_request};
pub use session_api::{BackendSessionClient, DEFAULT_API_URL};
