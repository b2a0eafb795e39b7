//! Vendor SSO Token Client
//!
//! Performs the OAuth2 `client_credentials` exchange against the vendor's SSO
//! realm. The client id/secret pair is sent as an HTTP Basic header and the
//! grant parameters (`grant_type=client_credentials`, `scope=roles`) go in the
//! form body, matching what the vendor realm expects.

use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::models::token::Credentials;

/// Error type for token exchange operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint answered with a non-2xx status. `message` carries
    /// the extracted `error_description`/`message` text for the caller.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("token endpoint returned success without an access_token")]
    MissingToken,
}

/// Client for the vendor SSO token endpoint.
pub struct AuthClient {
    http: Client,
    token_url: String,
}

impl AuthClient {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token_url: token_url.into(),
        }
    }

    /// Exchange a credential pair for a bearer access token.
    ///
    /// One outbound call; no caching or refresh. Upstream failures carry the
    /// upstream status so route handlers can mirror it back to the caller.
    pub async fn exchange(&self, creds: &Credentials) -> Result<String, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, basic_auth_header(creds))
            .form(&[("grant_type", "client_credentials"), ("scope", "roles")])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = extract_auth_error(&body);
            warn!(status = status.as_u16(), %message, "token endpoint rejected the exchange");
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        body.get("access_token")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(AuthError::MissingToken)
    }
}

fn basic_auth_header(creds: &Credentials) -> String {
    let raw = format!("{}:{}", creds.client_id, creds.client_secret);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(raw)
    )
}

/// Pull a human-readable error out of a token endpoint failure body.
/// Keycloak-style realms put it in `error_description`; some gateways use
/// `message` instead.
fn extract_auth_error(body: &Value) -> String {
    body.get("error_description")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "Authentication failed at external API.".to_string())
}
