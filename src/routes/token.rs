use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use tracing::error;

use crate::app_state::AppState;
use crate::models::token::{Credentials, TokenRequest, TokenResponse};
use crate::routes::error::{upstream_status, ApiError};
use crate::services::auth::AuthError;

/// POST /api/v1/auth/token — exchange client credentials for a bearer token.
///
/// Environment-configured credentials win; request-supplied `clientId`/
/// `clientSecret` are only consulted when the server carries none.
pub async fn issue_token(
    State(state): State<AppState>,
    body: Option<Json<TokenRequest>>,
) -> Result<Json<TokenResponse>, ApiError> {
    metrics::counter!("token_requests_total").increment(1);

    let creds = resolve_credentials(&state, body)?;
    let access_token = state.auth.exchange(&creds).await.map_err(map_auth_error)?;

    Ok(Json(TokenResponse { access_token }))
}

fn resolve_credentials(
    state: &AppState,
    body: Option<Json<TokenRequest>>,
) -> Result<Credentials, ApiError> {
    match state.config.env_credentials() {
        Ok(Some(creds)) => Ok(creds),
        Ok(None) => {
            let request = body.map(|Json(b)| b).unwrap_or_default();

            request
                .validate()
                .map_err(|report| ApiError::with_message(StatusCode::BAD_REQUEST, report.to_string()))?;

            request.into_credentials().ok_or_else(|| {
                ApiError::with_message(
                    StatusCode::BAD_REQUEST,
                    "clientId and clientSecret are required",
                )
            })
        }
        Err(err) => {
            error!(%err, "credential configuration is incomplete");
            Err(ApiError::with_message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error: Authentication credentials missing.",
            ))
        }
    }
}

fn map_auth_error(err: AuthError) -> ApiError {
    metrics::counter!("upstream_errors_total", "upstream" => "token").increment(1);

    match err {
        AuthError::Upstream { status, message } => {
            ApiError::with_message(upstream_status(status), message)
        }
        other => {
            error!(error = %other, "token exchange failed");
            ApiError::with_message(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {other}"),
            )
        }
    }
}
