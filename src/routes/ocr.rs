use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::error;

use crate::app_state::AppState;
use crate::models::ocr::OcrSubmitRequest;
use crate::routes::error::{upstream_status, ApiError};
use crate::services::auth::AuthError;
use crate::services::ocr::OcrError;

/// POST /api/v1/ocr/verify — forward an OCR verification payload to the vendor.
///
/// A caller-supplied `accessToken` is used as-is; otherwise the handler
/// acquires one inline from the configured credentials before submitting.
/// The upstream 2xx body is returned verbatim.
pub async fn submit_verification(
    State(state): State<AppState>,
    Json(request): Json<OcrSubmitRequest>,
) -> Result<Json<Value>, ApiError> {
    metrics::counter!("ocr_requests_total").increment(1);

    let Some(payload) = request.payload_with_front_image() else {
        return Err(ApiError::with_error(
            StatusCode::BAD_REQUEST,
            "OCR payload or image is missing",
        ));
    };

    let access_token = match request.caller_token() {
        Some(token) => token.to_string(),
        None => self_authenticate(&state).await?,
    };

    let result = state
        .ocr
        .verify(&access_token, payload)
        .await
        .map_err(map_ocr_error)?;

    Ok(Json(result))
}

/// Inline token acquisition for callers that did not supply one. Fails closed:
/// upstream auth failures propagate their status, configuration gaps are 500.
async fn self_authenticate(state: &AppState) -> Result<String, ApiError> {
    let creds = match state.config.env_credentials() {
        Ok(Some(creds)) => creds,
        Ok(None) => {
            error!("self-authentication requested but no credentials are configured");
            return Err(config_error());
        }
        Err(err) => {
            error!(%err, "credential configuration is incomplete");
            return Err(config_error());
        }
    };

    state.auth.exchange(&creds).await.map_err(|err| {
        metrics::counter!("upstream_errors_total", "upstream" => "token").increment(1);

        match err {
            AuthError::Upstream { status, message } => ApiError::with_error(
                upstream_status(status),
                format!("Authentication failed: {message}"),
            ),
            other => {
                error!(error = %other, "inline token exchange failed");
                ApiError::with_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal Server Error: {other}"),
                )
            }
        }
    })
}

fn map_ocr_error(err: OcrError) -> ApiError {
    metrics::counter!("upstream_errors_total", "upstream" => "ocr").increment(1);

    match err {
        OcrError::Upstream { status, message } => ApiError::with_error(
            upstream_status(status),
            format!("OCR API call failed: {message}"),
        ),
        OcrError::Http(err) => {
            error!(error = %err, "OCR submission failed");
            ApiError::with_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {err}"),
            )
        }
    }
}

fn config_error() -> ApiError {
    ApiError::with_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server configuration error: authentication credentials missing",
    )
}
