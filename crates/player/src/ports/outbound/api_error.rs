//! HTTP boundary error shared by all outbound network ports.

use thiserror::Error;

/// A failed outbound HTTP call, tagged with the URL it was made to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status
    #[error("Bad Response: {status}: {status_text} on {url}")]
    BadResponse {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The response body could not be decoded
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

impl RequestError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_response(url: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. }
            | Self::BadResponse { url, .. }
            | Self::InvalidResponse { url, .. } => url,
        }
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
