pub mod error;
pub mod health;
pub mod metrics;
pub mod ocr;
pub mod token;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Assemble the gateway router: the two proxy routes, the health probe, and
/// the shared middleware stack. Method routing answers 405 for non-POST
/// requests on the proxy routes before any handler logic runs.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/auth/token", post(token::issue_token))
        .route("/api/v1/ocr/verify", post(ocr::submit_verification))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024)) // OCR payloads carry base64 images
}
