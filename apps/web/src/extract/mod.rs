// Extraction proxy: browser uploads are relayed to the backend extraction API.

pub mod client;
pub mod handlers;

pub use client::{ExtractionBackend, HttpExtractionBackend};
