use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::AppError;
use crate::storage::client::{ObjectRequest, StorageError, StoredObject};
use crate::state::AppState;

/// Objects are content-addressed upstream, so clients may cache them forever.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// GET /api/storage/*path
///
/// The first path segment is the bucket, the rest is the object key.
pub async fn handle_storage_object(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let request = object_request(&path, &headers)?;

    match state.storage.fetch(request).await {
        Ok(object) => Ok(object_response(object)),
        Err(StorageError::Upstream { status }) => {
            // non-success upstream: same status, no body
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            Ok(status.into_response())
        }
        Err(e @ StorageError::Unreachable(_)) => {
            error!("Storage proxy failed for {path}: {e}");
            Err(AppError::BadGateway(
                "Failed to fetch from storage".to_string(),
            ))
        }
    }
}

fn object_request(path: &str, headers: &HeaderMap) -> Result<ObjectRequest, AppError> {
    let path = path.trim_start_matches('/');
    let (bucket, key) = path
        .split_once('/')
        .filter(|(bucket, key)| !bucket.is_empty() && !key.is_empty())
        .ok_or_else(|| AppError::NotFound(format!("No object at '{path}'")))?;

    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    Ok(ObjectRequest {
        bucket: bucket.to_string(),
        key: key.to_string(),
        range,
    })
}

fn object_response(object: StoredObject) -> Response {
    let StoredObject {
        body,
        content_type,
        content_length,
        content_range,
    } = object;

    let status = if content_range.is_some() {
        StatusCode::PARTIAL_CONTENT
    } else {
        StatusCode::OK
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(IMMUTABLE_CACHE_CONTROL),
    );
    if let Some(value) = content_type.and_then(|v| HeaderValue::from_str(&v).ok()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Some(length) = content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }
    if let Some(value) = content_range.and_then(|v| HeaderValue::from_str(&v).ok()) {
        headers.insert(header::CONTENT_RANGE, value);
        headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    }

    response
}
