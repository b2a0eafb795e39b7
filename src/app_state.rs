use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::auth::AuthClient;
use crate::services::ocr::OcrClient;

/// Shared application state passed to all route handlers. Immutable after
/// startup; requests never exchange state through it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthClient>,
    pub ocr: Arc<OcrClient>,
}

impl AppState {
    pub fn new(config: AppConfig, auth: AuthClient, ocr: OcrClient) -> Self {
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            ocr: Arc::new(ocr),
        }
    }
}
