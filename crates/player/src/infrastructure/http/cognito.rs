//! Cognito identity provider client
//!
//! Every call is a POST of an `InitiateAuth` JSON document to one fixed
//! endpoint; the flow is chosen by the `AuthFlow` discriminator.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::request::{read_json, send_request};
use crate::ports::outbound::{AuthTokens, IdentityProviderPort, RequestError};

/// Default Cognito endpoint.
pub const DEFAULT_COGNITO_URL: &str = "https://cognito-idp.us-east-1.amazonaws.com";

/// Default app client id.
pub const DEFAULT_CLIENT_ID: &str = "6pgtorp3ov46ltjlodi1q0e216";

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const TARGET_HEADER: &str = "X-Amz-Target";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CognitoMethod {
    InitiateAuth,
}

impl CognitoMethod {
    fn target(&self) -> &'static str {
        match self {
            CognitoMethod::InitiateAuth => "AWSCognitoIdentityProviderService.InitiateAuth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum AuthFlow {
    #[serde(rename = "USER_PASSWORD_AUTH")]
    UserPassword,
    #[serde(rename = "REFRESH_TOKEN_AUTH")]
    RefreshToken,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: AuthFlow,
    client_id: &'a str,
    auth_parameters: BTreeMap<&'static str, &'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: AuthenticationResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

impl From<AuthenticationResult> for AuthTokens {
    fn from(result: AuthenticationResult) -> Self {
        Self {
            access_token: result.access_token,
            id_token: result.id_token,
            refresh_token: result.refresh_token,
            expires_in: result.expires_in,
        }
    }
}

/// Client for the Cognito `InitiateAuth` API
#[derive(Clone)]
pub struct CognitoClient {
    client: Client,
    endpoint: String,
    client_id: String,
}

impl CognitoClient {
    pub fn new(client: Client, endpoint: &str, client_id: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            client_id: client_id.to_string(),
        }
    }

    async fn send(
        &self,
        method: CognitoMethod,
        body: &InitiateAuthRequest<'_>,
    ) -> Result<AuthTokens, RequestError> {
        let payload =
            serde_json::to_vec(body).map_err(|e| RequestError::transport(&self.endpoint, e))?;

        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header(TARGET_HEADER, method.target())
            .body(payload);

        let response = send_request(&self.client, request).await?;
        let parsed: InitiateAuthResponse = read_json(response).await?;
        Ok(parsed.authentication_result.into())
    }
}

#[async_trait]
impl IdentityProviderPort for CognitoClient {
    async fn initiate_auth(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthTokens, RequestError> {
        let body = InitiateAuthRequest {
            auth_flow: AuthFlow::UserPassword,
            client_id: &self.client_id,
            auth_parameters: BTreeMap::from([("USERNAME", username), ("PASSWORD", password)]),
        };
        self.send(CognitoMethod::InitiateAuth, &body).await
    }

    async fn refresh_auth(&self, refresh_token: &str) -> Result<AuthTokens, RequestError> {
        let body = InitiateAuthRequest {
            auth_flow: AuthFlow::RefreshToken,
            client_id: &self.client_id,
            auth_parameters: BTreeMap::from([("REFRESH_TOKEN", refresh_token)]),
        };
        self.send(CognitoMethod::InitiateAuth, &body).await
    }
}
