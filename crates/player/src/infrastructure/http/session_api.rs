//! Application backend session endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::request::{read_json, send_request};
use crate::ports::outbound::{AuthTokens, RequestError, SessionBackendPort};

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

/// Client for `{api}/auth/refresh` and `{api}/auth/logout`.
///
/// Relies on the shared client's cookie store to carry the backend session
/// cookie.
#[derive(Clone)]
pub struct BackendSessionClient {
    client: Client,
    base_url: String,
}

impl BackendSessionClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SessionBackendPort for BackendSessionClient {
    async fn refresh(&self) -> Result<AuthTokens, RequestError> {
        let request = self.client.get(self.url("/auth/refresh"));
        let response = send_request(&self.client, request).await?;
        let body: RefreshResponse = read_json(response).await?;

        Ok(AuthTokens {
            access_token: body.access_token,
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
        })
    }

    async fn logout(&self) -> Result<(), RequestError> {
        // Only the status matters; the acknowledgment body is not inspected.
        let request = self.client.post(self.url("/auth/logout"));
        send_request(&self.client, request).await?;
        Ok(())
    }
}
