use std::sync::Arc;

use crate::config::Config;
use crate::extract::ExtractionBackend;
use crate::storage::ObjectStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream for `POST /api/extract`. Default: HttpExtractionBackend.
    pub extraction: Arc<dyn ExtractionBackend>,
    /// Upstream for `GET /api/storage/*path`. Default: S3ObjectStore.
    pub storage: Arc<dyn ObjectStore>,
    pub config: Config,
}
