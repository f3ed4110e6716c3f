use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::viewer::link::ViewerLink;

#[derive(Debug, Deserialize)]
pub struct ViewerLinkQuery {
    #[serde(rename = "letterId")]
    pub letter_id: String,
    pub highlight: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ViewerLinkResponse {
    pub url: String,
}

/// GET /api/viewer/link
pub async fn handle_viewer_link(Query(params): Query<ViewerLinkQuery>) -> Json<ViewerLinkResponse> {
    let link = ViewerLink::new(params.letter_id, params.highlight.as_deref());
    Json(ViewerLinkResponse { url: link.to_url() })
}
