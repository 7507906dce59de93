//! Generic request helper shared by every HTTP adapter.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::ports::outbound::RequestError;

/// Build the shared HTTP client.
///
/// The cookie store lets the backend session cookie ride along with every
/// request, the way a browser sends credentials.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
            Client::new()
        })
}

/// Send a request and fail on any non-success status.
///
/// A bad status is logged and returned as [`RequestError::BadResponse`]
/// carrying the URL and status text; callers decide what to do with it.
pub async fn send_request(client: &Client, request: RequestBuilder) -> Result<Response, RequestError> {
    let request = request
        .build()
        .map_err(|e| RequestError::transport("<invalid request>", e))?;
    let url = request.url().to_string();

    let response = client
        .execute(request)
        .await
        .map_err(|e| RequestError::transport(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        tracing::error!(
            url = %url,
            status = status.as_u16(),
            status_text = %status_text,
            "Bad Response"
        );
        return Err(RequestError::BadResponse {
            url,
            status: status.as_u16(),
            status_text,
        });
    }

    Ok(response)
}

/// Decode a successful response body as JSON.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let url = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RequestError::transport(&url, e))?;
    serde_json::from_slice(&bytes).map_err(|e| RequestError::invalid_response(url, e))
}
