use std::fmt;

use thiserror::Error;

/// Path of the document viewer page.
pub const VIEWER_PATH: &str = "/viewer";
/// Highlights longer than this many UTF-16 code units are cut down before encoding.
pub const MAX_HIGHLIGHT_UNITS: usize = 500;

const LETTER_ID_PARAM: &str = "letterId";
const HIGHLIGHT_PARAM: &str = "highlight";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerLinkError {
    #[error("Not a viewer link: {0}")]
    NotAViewerPath(String),

    #[error("Viewer link has no letterId parameter")]
    MissingLetterId,
}

/// A deep link into the document viewer.
///
/// Values are only built through [`ViewerLink::new`] or [`ViewerLink::parse`],
/// so `highlight` is never empty and never longer than [`MAX_HIGHLIGHT_UNITS`]
/// UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerLink {
    document_id: String,
    highlight: Option<String>,
}

impl ViewerLink {
    /// Normalizes the highlight: empty text is dropped, long text is truncated.
    pub fn new(document_id: impl Into<String>, highlight: Option<&str>) -> Self {
        let highlight = highlight
            .filter(|h| !h.is_empty())
            .map(|h| truncate_utf16(h, MAX_HIGHLIGHT_UNITS).to_string());
        Self {
            document_id: document_id.into(),
            highlight,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn highlight(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    /// Renders `/viewer?letterId=..[&highlight=..]` with form-urlencoded values.
    pub fn to_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair(LETTER_ID_PARAM, &self.document_id);
        if let Some(highlight) = &self.highlight {
            query.append_pair(HIGHLIGHT_PARAM, highlight);
        }
        format!("{VIEWER_PATH}?{}", query.finish())
    }

    /// Decodes a link produced by [`ViewerLink::to_url`] (or typed by hand).
    /// The highlight goes through the same normalization as [`ViewerLink::new`].
    pub fn parse(url: &str) -> Result<Self, ViewerLinkError> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        if path != VIEWER_PATH {
            return Err(ViewerLinkError::NotAViewerPath(path.to_string()));
        }

        let mut document_id = None;
        let mut highlight = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            // first occurrence wins, like URLSearchParams.get
            match &*key {
                LETTER_ID_PARAM if document_id.is_none() => document_id = Some(value.into_owned()),
                HIGHLIGHT_PARAM if highlight.is_none() => highlight = Some(value.into_owned()),
                _ => {}
            }
        }

        let document_id = document_id.ok_or(ViewerLinkError::MissingLetterId)?;
        Ok(Self::new(document_id, highlight.as_deref()))
    }
}

impl fmt::Display for ViewerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Builds the viewer deep link for a document, optionally highlighting a passage.
pub fn build_viewer_url(document_id: &str, highlight_text: Option<&str>) -> String {
    ViewerLink::new(document_id, highlight_text).to_url()
}

/// Cuts `text` to at most `max_units` UTF-16 code units, on a char boundary,
/// so a surrogate pair is never split.
fn truncate_utf16(text: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (byte_idx, c) in text.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &text[..byte_idx];
        }
    }
    text
}
