//! Session context
//!
//! One `SessionContext` is built at startup and shared (behind an `Arc`) with
//! everything that needs authenticated calls. Tokens live in the
//! [`TokenStore`]; this type layers expiry tracking, silent refresh and change
//! notification on top.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{watch, Mutex};
use ttrpgz_domain::UserId;

use super::claims::IdTokenClaims;
use super::token_store::{StoredSession, TokenStore};
use crate::application::error::SessionError;
use crate::ports::outbound::{AuthTokens, ClockPort, IdentityProviderPort, SessionBackendPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Authenticated,
    /// Tokens are present but past their expiry; the next access refreshes
    Expired,
}

pub struct SessionContext {
    tokens: TokenStore,
    clock: Arc<dyn ClockPort>,
    identity: Arc<dyn IdentityProviderPort>,
    backend: Arc<dyn SessionBackendPort>,
    refresh_lock: Mutex<()>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionContext {
    pub fn new(
        tokens: TokenStore,
        clock: Arc<dyn ClockPort>,
        identity: Arc<dyn IdentityProviderPort>,
        backend: Arc<dyn SessionBackendPort>,
    ) -> Self {
        let initial = state_of(&tokens.load(), clock.now());
        let (state_tx, _) = watch::channel(initial);
        Self {
            tokens,
            clock,
            identity,
            backend,
            refresh_lock: Mutex::new(()),
            state_tx,
        }
    }

    /// Store a freshly issued token set, expiring `expires_in` seconds from now.
    ///
    /// Nothing is stored if the token set is incomplete or its lifetime is
    /// not a positive, representable number of seconds.
    pub fn login(&self, tokens: AuthTokens) -> Result<(), SessionError> {
        self.store(tokens, None)?;
        tracing::info!("Session started");
        self.notify();
        Ok(())
    }

    /// Password login against the identity provider.
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let tokens = self
            .identity
            .initiate_auth(username, password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Login failed");
                SessionError::from(e)
            })?;
        self.login(tokens).map_err(|e| {
            tracing::error!(error = %e, "Login response rejected");
            e
        })
    }

    /// End the session.
    ///
    /// Local tokens are always cleared; a failed backend notification is only
    /// logged.
    pub async fn logout(&self) {
        self.tokens.clear();
        self.notify();
        tracing::info!("Session cleared");

        if let Err(e) = self.backend.logout().await {
            tracing::warn!(error = %e, "Backend logout failed; local session already cleared");
        }
    }

    /// The current access token, refreshed first if it has expired.
    ///
    /// A failed refresh leaves the stale (or empty) token in place.
    pub async fn access_token(&self) -> String {
        if self.is_expired(&self.tokens.load()) {
            let _guard = self.refresh_lock.lock().await;
            // Another caller may have refreshed while we waited.
            let session = self.tokens.load();
            if self.is_expired(&session) {
                self.refresh_locked(&session).await;
            }
        }
        self.tokens.load().access_token
    }

    /// Refresh unconditionally. Returns whether new tokens were stored.
    pub async fn refresh_session(&self) -> bool {
        let _guard = self.refresh_lock.lock().await;
        let session = self.tokens.load();
        self.refresh_locked(&session).await
    }

    pub fn is_authenticated(&self) -> bool {
        !self.tokens.load().id_token.is_empty()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.claims().map(|claims| UserId::new(claims.sub))
    }

    pub fn email(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.email)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self.tokens.load().expires_at {
            0 => None,
            millis => DateTime::from_timestamp_millis(millis),
        }
    }

    pub fn state(&self) -> SessionState {
        state_of(&self.tokens.load(), self.clock.now())
    }

    /// Receive a notification on every login, logout and refresh.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    async fn refresh_locked(&self, session: &StoredSession) -> bool {
        let result = match session.refresh_token.as_deref() {
            Some(refresh_token) => self.identity.refresh_auth(refresh_token).await,
            None => self.backend.refresh().await,
        };

        let stored = result
            .map_err(SessionError::from)
            .and_then(|tokens| self.store(tokens, session.refresh_token.clone()));
        if let Err(e) = stored {
            tracing::warn!(error = %e, "Session refresh failed; keeping previous tokens");
            return false;
        }

        tracing::info!("Session refreshed");
        self.notify();
        true
    }

    fn store(
        &self,
        tokens: AuthTokens,
        previous_refresh: Option<String>,
    ) -> Result<(), SessionError> {
        check_tokens(&tokens)?;
        let expires_at = expiry(self.clock.now(), tokens.expires_in)?;
        self.tokens.save(&StoredSession {
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            // Refresh flows usually omit the refresh token; keep the one we have.
            refresh_token: tokens.refresh_token.or(previous_refresh),
            expires_at: expires_at.timestamp_millis(),
        });
        Ok(())
    }

    fn claims(&self) -> Option<IdTokenClaims> {
        let id_token = self.tokens.load().id_token;
        if id_token.is_empty() {
            return None;
        }
        IdTokenClaims::decode(&id_token)
            .map_err(|e| tracing::warn!(error = %e, "Could not decode ID token"))
            .ok()
    }

    fn is_expired(&self, session: &StoredSession) -> bool {
        self.clock.now().timestamp_millis() >= session.expires_at
    }

    fn notify(&self) {
        self.state_tx.send_replace(self.state());
    }
}

fn state_of(session: &StoredSession, now: DateTime<Utc>) -> SessionState {
    if session.id_token.is_empty() {
        SessionState::LoggedOut
    } else if now.timestamp_millis() >= session.expires_at {
        SessionState::Expired
    } else {
        SessionState::Authenticated
    }
}

fn check_tokens(tokens: &AuthTokens) -> Result<(), SessionError> {
    if tokens.access_token.is_empty() || tokens.id_token.is_empty() {
        return Err(SessionError::invalid_response(
            "token response is missing the access or ID token",
        ));
    }
    Ok(())
}

fn expiry(now: DateTime<Utc>, expires_in: i64) -> Result<DateTime<Utc>, SessionError> {
    if expires_in <= 0 {
        return Err(SessionError::invalid_response(format!(
            "token lifetime must be positive, got {expires_in}s"
        )));
    }
    Duration::try_seconds(expires_in)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            SessionError::invalid_response(format!("token lifetime of {expires_in}s is out of range"))
        })
}
