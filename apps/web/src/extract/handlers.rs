use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::error;

use crate::errors::AppError;
use crate::extract::client::ExtractPayload;
use crate::state::AppState;

/// POST /api/extract
///
/// Relays the upstream JSON and status code as-is. Any failure to get a JSON
/// answer out of the backend becomes a 502.
pub async fn handle_extract(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = ExtractPayload {
        body,
        content_type: header_string(&headers, header::CONTENT_TYPE),
        content_length: header_string(&headers, header::CONTENT_LENGTH),
    };

    let reply = state.extraction.extract(payload).await.map_err(|e| {
        error!("Extraction proxy failed: {e}");
        AppError::BadGateway("Failed to connect to backend".to_string())
    })?;

    let status = StatusCode::from_u16(reply.status).map_err(|_| {
        AppError::BadGateway(format!("Backend returned invalid status {}", reply.status))
    })?;
    Ok((status, Json(reply.body)).into_response())
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
