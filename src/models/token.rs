use garde::Validate;
use serde::{Deserialize, Serialize};

/// Client credential pair used once per invocation to authenticate against
/// the vendor token endpoint. Never persisted, never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Request body for the token route. Credentials here are only consulted when
/// the server-side configuration carries none.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[garde(length(min = 1, max = 200))]
    pub client_id: Option<String>,

    #[garde(length(min = 1, max = 200))]
    pub client_secret: Option<String>,
}

impl TokenRequest {
    /// Extract a usable credential pair from the request body, if both fields
    /// are present and non-empty.
    pub fn into_credentials(self) -> Option<Credentials> {
        match (self.client_id, self.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(id, secret))
            }
            _ => None,
        }
    }
}

/// Response returned to the caller on a successful token exchange.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_credentials_requires_both_fields() {
        let req = TokenRequest {
            client_id: Some("partner-demo".to_string()),
            client_secret: None,
        };
        assert!(req.into_credentials().is_none());
    }

    #[test]
    fn test_into_credentials_rejects_empty_strings() {
        let req = TokenRequest {
            client_id: Some("partner-demo".to_string()),
            client_secret: Some(String::new()),
        };
        assert!(req.into_credentials().is_none());
    }

    #[test]
    fn test_into_credentials_complete_pair() {
        let req = TokenRequest {
            client_id: Some("partner-demo".to_string()),
            client_secret: Some("s3cret".to_string()),
        };
        let creds = req.into_credentials().unwrap();
        assert_eq!(creds.client_id, "partner-demo");
        assert_eq!(creds.client_secret, "s3cret");
    }

    #[test]
    fn test_camel_case_wire_fields() {
        let req: TokenRequest =
            serde_json::from_str(r#"{"clientId":"a","clientSecret":"b"}"#).unwrap();
        assert_eq!(req.client_id.as_deref(), Some("a"));
        assert_eq!(req.client_secret.as_deref(), Some("b"));
    }
}
