//! Authentication ports
//!
//! Two remote collaborators issue tokens: the identity provider (password and
//! refresh-token flows) and the application backend (cookie-based session
//! refresh and logout). Both are consumed by `SessionContext`.

use async_trait::async_trait;

use super::RequestError;

/// Token set returned by either collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    pub access_token: String,
    pub id_token: String,
    /// Only issued by password login; refresh flows usually omit it
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    pub expires_in: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProviderPort: Send + Sync {
    /// Username/password login.
    async fn initiate_auth(&self, username: &str, password: &str)
        -> Result<AuthTokens, RequestError>;

    /// Exchange a refresh token for new access/ID tokens.
    async fn refresh_auth(&self, refresh_token: &str) -> Result<AuthTokens, RequestError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionBackendPort: Send + Sync {
    /// Refresh the session using the credentials the backend holds for us.
    async fn refresh(&self) -> Result<AuthTokens, RequestError>;

    /// Tell the backend the session is over.
    async fn logout(&self) -> Result<(), RequestError>;
}
