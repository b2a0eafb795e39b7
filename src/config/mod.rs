use serde::Deserialize;

use crate::models::token::Credentials;

/// Default vendor sandbox SSO token endpoint (client_credentials grant).
fn default_token_url() -> String {
    "https://qa-sso.vida.id/auth/realms/vida/protocol/openid-connect/token".to_string()
}

/// Default vendor sandbox OCR verification endpoint.
fn default_ocr_url() -> String {
    "https://my-services-sandbox.np.vida.id/api/v1/verify/summary".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// OAuth2 client id for the vendor SSO realm. Optional; when unset the
    /// Token Issuer falls back to request-supplied credentials.
    pub auth_client_id: Option<String>,

    /// OAuth2 client secret paired with `auth_client_id`.
    pub auth_client_secret: Option<String>,

    /// OAuth2 token endpoint URL. Overridable so tests can point the gateway
    /// at a mock server.
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// OCR verification endpoint URL.
    #[serde(default = "default_ocr_url")]
    pub ocr_url: String,
}

/// The environment carries exactly one of the two credential values.
/// Treated as a server misconfiguration rather than a client error.
#[derive(Debug, thiserror::Error)]
#[error("AUTH_CLIENT_ID and AUTH_CLIENT_SECRET must be set together")]
pub struct PartialCredentials;

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Resolve the server-side credential pair.
    ///
    /// Empty strings count as unset so a blank variable in the deployment
    /// environment behaves the same as a missing one. Returns `Ok(None)` when
    /// neither value is set, letting callers fall back to request-supplied
    /// credentials.
    pub fn env_credentials(&self) -> Result<Option<Credentials>, PartialCredentials> {
        let id = self.auth_client_id.as_deref().filter(|s| !s.is_empty());
        let secret = self.auth_client_secret.as_deref().filter(|s| !s.is_empty());

        match (id, secret) {
            (Some(id), Some(secret)) => Ok(Some(Credentials::new(id, secret))),
            (None, None) => Ok(None),
            _ => Err(PartialCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            bind_addr: default_bind_addr(),
            auth_client_id: None,
            auth_client_secret: None,
            token_url: default_token_url(),
            ocr_url: default_ocr_url(),
        }
    }

    #[test]
    fn test_env_credentials_both_set() {
        let mut config = base_config();
        config.auth_client_id = Some("partner-demo".to_string());
        config.auth_client_secret = Some("s3cret".to_string());

        let creds = config.env_credentials().unwrap().unwrap();
        assert_eq!(creds.client_id, "partner-demo");
        assert_eq!(creds.client_secret, "s3cret");
    }

    #[test]
    fn test_env_credentials_none_set() {
        let config = base_config();
        assert!(config.env_credentials().unwrap().is_none());
    }

    #[test]
    fn test_env_credentials_partial_is_error() {
        let mut config = base_config();
        config.auth_client_id = Some("partner-demo".to_string());
        assert!(config.env_credentials().is_err());
    }

    #[test]
    fn test_env_credentials_empty_counts_as_unset() {
        let mut config = base_config();
        config.auth_client_id = Some(String::new());
        config.auth_client_secret = Some(String::new());
        assert!(config.env_credentials().unwrap().is_none());
    }
}
