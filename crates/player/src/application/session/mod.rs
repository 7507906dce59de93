//! Session lifecycle: token persistence, expiry, refresh and claims.

mod claims;
mod context;
mod token_store;

pub use claims::{ClaimsError, IdTokenClaims};
pub use context::{SessionContext, SessionState};
pub use token_store::{StoredSession, TokenStore};

#[cfg(test)]
pub(crate) use claims::encode_test_token;
