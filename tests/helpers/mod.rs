//! Test helper utilities for integration testing
//!
//! Runs the real router on an ephemeral port with the upstream clients
//! pointed at an httpmock server standing in for the vendor endpoints.

use ocr_gateway::app_state::AppState;
use ocr_gateway::config::AppConfig;
use ocr_gateway::routes;
use ocr_gateway::services::auth::AuthClient;
use ocr_gateway::services::ocr::OcrClient;

/// Build a gateway config pointed at mock upstream endpoints.
pub fn gateway_config(
    token_url: &str,
    ocr_url: &str,
    credentials: Option<(&str, &str)>,
) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        auth_client_id: credentials.map(|(id, _)| id.to_string()),
        auth_client_secret: credentials.map(|(_, secret)| secret.to_string()),
        token_url: token_url.to_string(),
        ocr_url: ocr_url.to_string(),
    }
}

/// Serve the assembled router on an ephemeral port and return its base URL.
pub async fn spawn_gateway(config: AppConfig) -> String {
    let auth = AuthClient::new(config.token_url.clone());
    let ocr = OcrClient::new(config.ocr_url.clone());
    let state = AppState::new(config, auth, ocr);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}
