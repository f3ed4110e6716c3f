//! Client for the backend extraction API.
//!
//! A plain pass-through: one request out per request in, no retries.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

const EXTRACT_PATH: &str = "/api/extract";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned non-JSON body (status {status}): {source}")]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw document upload as received from the browser.
#[derive(Debug, Clone)]
pub struct ExtractPayload {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

/// The backend's answer, relayed verbatim.
#[derive(Debug, Clone)]
pub struct ExtractReply {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait ExtractionBackend: Send + Sync {
    async fn extract(&self, payload: ExtractPayload) -> Result<ExtractReply, BackendError>;
}

/// Forwards extraction requests to `{base_url}/api/extract` over HTTP.
#[derive(Clone)]
pub struct HttpExtractionBackend {
    client: Client,
    base_url: String,
}

impl HttpExtractionBackend {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    fn extract_url(&self) -> String {
        format!("{}{}", self.base_url, EXTRACT_PATH)
    }
}

#[async_trait]
impl ExtractionBackend for HttpExtractionBackend {
    async fn extract(&self, payload: ExtractPayload) -> Result<ExtractReply, BackendError> {
        let url = self.extract_url();
        let mut request = self.client.post(&url);
        if let Some(content_type) = &payload.content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(content_length) = &payload.content_length {
            request = request.header(reqwest::header::CONTENT_LENGTH, content_length);
        }

        let response = request.body(payload.body).send().await.map_err(|e| {
            warn!("Extraction backend at {url} unreachable: {e}");
            BackendError::Http(e)
        })?;

        let status = response.status().as_u16();
        let raw = response.bytes().await?;
        let body = serde_json::from_slice(&raw)
            .map_err(|source| BackendError::InvalidJson { status, source })?;

        debug!("Extraction backend replied {status} ({} bytes)", raw.len());
        Ok(ExtractReply { status, body })
    }
}
