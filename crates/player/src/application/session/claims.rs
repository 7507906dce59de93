//! ID token payload decoding
//!
//! Only the payload segment is read and the signature is not verified, so the
//! claims must only be used for display, never for authorization.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Malformed,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(String),

    #[error("token payload is not valid JSON: {0}")]
    Json(String),
}

/// The claims the client reads from an ID token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl IdTokenClaims {
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
            _ => return Err(ClaimsError::Malformed),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
