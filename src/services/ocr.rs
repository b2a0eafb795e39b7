//! Vendor OCR Verification Client
//!
//! Forwards a caller-supplied OCR payload to the vendor's verify-summary
//! endpoint with a Bearer token. The payload and the 2xx response body are
//! both passed through verbatim.

use reqwest::Client;
use serde_json::Value;
use tracing::warn;

/// Error type for OCR submission operations.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx from the verification endpoint; `message` carries the
    /// extracted error text.
    #[error("{message}")]
    Upstream { status: u16, message: String },
}

/// Client for the vendor OCR verification endpoint.
pub struct OcrClient {
    http: Client,
    ocr_url: String,
}

impl OcrClient {
    pub fn new(ocr_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            ocr_url: ocr_url.into(),
        }
    }

    /// Submit the payload with a Bearer header and return the upstream JSON
    /// body unmodified on success.
    pub async fn verify(&self, access_token: &str, payload: &Value) -> Result<Value, OcrError> {
        let response = self
            .http
            .post(&self.ocr_url)
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = extract_ocr_error(&body);
            warn!(status = status.as_u16(), %message, "OCR endpoint rejected the submission");
            return Err(OcrError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

/// Error text from an OCR failure body: `error_description` when present,
/// otherwise the whole body serialized so nothing gets lost.
fn extract_ocr_error(body: &Value) -> String {
    body.get("error_description")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
