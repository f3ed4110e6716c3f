// Storage proxy: documents are served to the viewer straight from object storage.

pub mod client;
pub mod handlers;

pub use client::{ObjectStore, S3ObjectStore};
