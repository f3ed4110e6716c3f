// Viewer deep links: building and decoding `/viewer?letterId=..&highlight=..`.

pub mod handlers;
pub mod link;

pub use link::{build_viewer_url, ViewerLink};
