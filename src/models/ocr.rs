use serde::Deserialize;
use serde_json::Value;

/// Request body for the OCR verification route.
///
/// `ocr_payload` is treated as an opaque document and forwarded to the vendor
/// unmodified; only the presence of the front-side identity image is checked
/// locally. A caller-supplied `access_token` skips the inline token exchange.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrSubmitRequest {
    pub access_token: Option<String>,
    pub ocr_payload: Option<Value>,
}

impl OcrSubmitRequest {
    /// The vendor rejects documents without a front-side image, so the check
    /// happens here before any outbound call is made. Returns the payload to
    /// forward when the image is present.
    pub fn payload_with_front_image(&self) -> Option<&Value> {
        let payload = self.ocr_payload.as_ref()?;
        let has_image = payload
            .get("payload")
            .and_then(|p| p.get("idFrontSideImage"))
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());

        has_image.then_some(payload)
    }

    /// Caller-supplied bearer token, if present and non-empty.
    pub fn caller_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_front_image_present() {
        let req = OcrSubmitRequest {
            access_token: None,
            ocr_payload: Some(json!({"payload": {"idFrontSideImage": "base64data"}})),
        };
        assert!(req.payload_with_front_image().is_some());
    }

    #[test]
    fn test_missing_payload_object() {
        let req = OcrSubmitRequest::default();
        assert!(req.payload_with_front_image().is_none());
    }

    #[test]
    fn test_missing_image_field() {
        let req = OcrSubmitRequest {
            access_token: None,
            ocr_payload: Some(json!({"payload": {"idBackSideImage": "base64data"}})),
        };
        assert!(req.payload_with_front_image().is_none());
    }

    #[test]
    fn test_empty_image_rejected() {
        let req = OcrSubmitRequest {
            access_token: None,
            ocr_payload: Some(json!({"payload": {"idFrontSideImage": ""}})),
        };
        assert!(req.payload_with_front_image().is_none());
    }

    #[test]
    fn test_non_string_image_rejected() {
        let req = OcrSubmitRequest {
            access_token: None,
            ocr_payload: Some(json!({"payload": {"idFrontSideImage": 42}})),
        };
        assert!(req.payload_with_front_image().is_none());
    }

    #[test]
    fn test_caller_token_filters_empty() {
        let req = OcrSubmitRequest {
            access_token: Some(String::new()),
            ocr_payload: None,
        };
        assert!(req.caller_token().is_none());
    }
}
