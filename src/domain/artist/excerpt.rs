//! Excerpt extraction from encyclopedia API response bodies.
//!
//! Two strategies are available:
//!
//! - [`ExtractionStrategy::Textual`] locates the `"extract":"` marker in the raw
//!   body and cuts at the first escaped paragraph break (`\n\n`). Escape
//!   sequences inside the excerpt are left untouched.
//! - [`ExtractionStrategy::Structured`] parses the body as JSON and reads the
//!   first page's `extract` field, cutting at the first real paragraph break.
//!
//! Both strategies report a miss as an [`ExtractError`]; they never panic on
//! malformed input.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Marker preceding the excerpt value in the raw body.
pub const EXTRACT_MARKER: &str = "\"extract\":\"";

/// Escaped paragraph break as it appears in the raw JSON text.
pub const ESCAPED_PARAGRAPH_BREAK: &str = "\\n\\n";

/// Plain-text summary of an artist. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistExcerpt(String);

impl ArtistExcerpt {
    /// Creates an excerpt, rejecting empty text.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::empty_field("excerpt"));
        }
        Ok(Self(text))
    }

    /// Returns the excerpt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the excerpt, returning the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ArtistExcerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons an excerpt could not be isolated from a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The body carries no extract field (e.g. the page does not exist).
    #[error("response has no extract field")]
    MissingExtract,

    /// The extract value has neither a paragraph break nor a closing quote.
    #[error("extract value is unterminated")]
    Unterminated,

    /// The first paragraph of the extract is empty.
    #[error("extract is empty")]
    Empty,

    /// The body is not valid JSON (structured strategy only).
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// How the excerpt is located inside a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Literal marker scan over the raw text.
    #[default]
    Textual,
    /// JSON parse of the `query.pages.*.extract` field.
    Structured,
}

impl ExtractionStrategy {
    /// Extracts the first descriptive paragraph from `body`.
    pub fn extract(&self, body: &str) -> Result<ArtistExcerpt, ExtractError> {
        match self {
            ExtractionStrategy::Textual => extract_textual(body),
            ExtractionStrategy::Structured => extract_structured(body),
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::Textual => write!(f, "textual"),
            ExtractionStrategy::Structured => write!(f, "structured"),
        }
    }
}

/// Isolates the excerpt by scanning for literal markers in the raw body.
///
/// The excerpt starts right after the first `"extract":"` and ends before the
/// first escaped `\n\n` found after that point. When the value holds a single
/// paragraph, the closing quote of the JSON string ends it instead.
pub fn extract_textual(body: &str) -> Result<ArtistExcerpt, ExtractError> {
    let marker_at = body
        .find(EXTRACT_MARKER)
        .ok_or(ExtractError::MissingExtract)?;
    let value = &body[marker_at + EXTRACT_MARKER.len()..];

    let end = excerpt_end(value).ok_or(ExtractError::Unterminated)?;
    ArtistExcerpt::new(&value[..end]).map_err(|_| ExtractError::Empty)
}

/// Byte offset of the first paragraph break or unescaped `"` in a JSON
/// string value.
///
/// Escape sequences are consumed as pairs, so an escaped backslash followed
/// by `n` is never mistaken for a break.
fn excerpt_end(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\\' if bytes[idx..].starts_with(ESCAPED_PARAGRAPH_BREAK.as_bytes()) => {
                return Some(idx)
            }
            b'\\' => idx += 2,
            b'"' => return Some(idx),
            _ => idx += 1,
        }
    }
    None
}

/// Isolates the excerpt by deserializing the response body.
pub fn extract_structured(body: &str) -> Result<ArtistExcerpt, ExtractError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| ExtractError::Malformed(e.to_string()))?;

    let text = response
        .query
        .and_then(|query| query.pages.into_extracts().into_iter().next())
        .ok_or(ExtractError::MissingExtract)?;

    let first_paragraph = text.split("\n\n").next().unwrap_or_default();
    ArtistExcerpt::new(first_paragraph).map_err(|_| ExtractError::Empty)
}

// ----- Encyclopedia API Types -----

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Pages,
}

/// `formatversion=1` keys pages by id, `formatversion=2` returns a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Pages {
    ById(BTreeMap<String, Page>),
    List(Vec<Page>),
}

impl Default for Pages {
    fn default() -> Self {
        Pages::List(Vec::new())
    }
}

impl Pages {
    fn into_extracts(self) -> Vec<String> {
        let pages: Vec<Page> = match self {
            Pages::ById(map) => map.into_values().collect(),
            Pages::List(list) => list,
        };
        pages.into_iter().filter_map(|page| page.extract).collect()
    }
}

#[derive(Debug, Deserialize)]
struct Page {
    extract: Option<String>,
}
