//! Application layer error types

use thiserror::Error;

use crate::ports::outbound::RequestError;

/// Errors surfaced by session operations that the caller has to handle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The identity provider or backend call failed
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// A response arrived but did not contain a usable session
    #[error("Invalid session response: {0}")]
    InvalidResponse(String),

    /// The operation needs a session and there is none
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl SessionError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// True when the provider rejected the credentials rather than failing.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            SessionError::Request(RequestError::BadResponse {
                status: 400 | 401 | 403,
                ..
            })
        )
    }
}
