use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StorageError {
    /// The store answered, but not with the object.
    #[error("Storage returned status {status}")]
    Upstream { status: u16 },

    /// No answer at all (DNS, connect, timeout, truncated body).
    #[error("Storage unreachable: {0}")]
    Unreachable(String),
}

/// One object read, addressed by bucket and key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRequest {
    pub bucket: String,
    pub key: String,
    /// Raw `Range` header value, forwarded untouched.
    pub range: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    /// Set when the store served a byte range.
    pub content_range: Option<String>,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, request: ObjectRequest) -> Result<StoredObject, StorageError>;
}

/// S3-compatible store (MinIO locally, AWS in production).
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, request: ObjectRequest) -> Result<StoredObject, StorageError> {
        let ObjectRequest { bucket, key, range } = request;

        let output = self
            .client
            .get_object()
            .bucket(&bucket)
            .key(&key)
            .set_range(range)
            .send()
            .await
            .map_err(|err| match err.raw_response() {
                Some(raw) => {
                    let status = raw.status().as_u16();
                    debug!("s3://{bucket}/{key} answered {status}");
                    StorageError::Upstream { status }
                }
                None => {
                    warn!("s3://{bucket}/{key} unreachable: {}", DisplayErrorContext(&err));
                    StorageError::Unreachable(DisplayErrorContext(&err).to_string())
                }
            })?;

        let content_type = output.content_type().map(String::from);
        let content_length = output.content_length().and_then(|l| u64::try_from(l).ok());
        let content_range = output.content_range().map(String::from);
        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Unreachable(format!("Failed reading object body: {e}")))?
            .into_bytes();

        debug!("Fetched s3://{bucket}/{key} ({} bytes)", body.len());
        Ok(StoredObject {
            body,
            content_type,
            content_length,
            content_range,
        })
    }
}
