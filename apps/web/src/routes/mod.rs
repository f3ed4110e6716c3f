pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extract::handlers::handle_extract;
use crate::state::AppState;
use crate::storage::handlers::handle_storage_object;
use crate::viewer::handlers::handle_viewer_link;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Viewer deep links
        .route("/api/viewer/link", get(handle_viewer_link))
        // Proxies
        .route(
            "/api/extract",
            post(handle_extract).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/storage/*path", get(handle_storage_object))
        .with_state(state)
}
