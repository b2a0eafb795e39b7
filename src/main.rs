mod app_state;
mod config;
mod models;
mod routes;
mod services;

use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use config::AppConfig;
use services::{auth::AuthClient, ocr::OcrClient};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing ocr-gateway server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "token_requests_total",
        "Total token exchange requests received"
    );
    metrics::describe_counter!(
        "ocr_requests_total",
        "Total OCR verification requests received"
    );
    metrics::describe_counter!(
        "upstream_errors_total",
        "Total failures reported by the vendor endpoints"
    );

    // Initialize upstream vendor clients
    let auth_client = AuthClient::new(config.token_url.clone());
    let ocr_client = OcrClient::new(config.ocr_url.clone());

    let bind_addr = config.bind_addr.clone();

    // Create shared application state
    let state = AppState::new(config, auth_client, ocr_client);

    // Build API routes; the Prometheus scrape endpoint carries its own state
    let app = routes::router(state).route(
        "/metrics",
        get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
    );

    tracing::info!("Starting ocr-gateway on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
