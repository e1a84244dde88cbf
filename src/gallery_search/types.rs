//! Data structures exchanged with the gallery search backend

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Query
// =============================================================================

/// What is being searched: a gallery and a keyword
///
/// Immutable once built. Submitting a different value to a session replaces
/// all results gathered for the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    gallery_source: String,
    keyword: String,
}

impl SearchQuery {
    /// Create a query; both parts are stored trimmed
    #[must_use]
    pub fn new(gallery_source: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            gallery_source: gallery_source.into().trim().to_string(),
            keyword: keyword.into().trim().to_string(),
        }
    }

    #[must_use]
    pub fn gallery_source(&self) -> &str {
        &self.gallery_source
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:'{}'", self.gallery_source, self.keyword)
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Opaque continuation token handed out by the backend
///
/// Only ever passed back verbatim; nothing in this crate looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchCursor(String);

impl SearchCursor {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SearchCursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SearchCursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// =============================================================================
// Records
// =============================================================================

/// A single matched post
///
/// Field names on the wire follow the backend (`writer`, `views`,
/// `recommend`). Counts arrive as display strings and may be `"-"`, so they
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub title: String,

    #[serde(rename = "writer", default = "unknown_author")]
    pub author: String,

    #[serde(default)]
    pub date: String,

    #[serde(rename = "views", default = "zero_count")]
    pub view_count: String,

    #[serde(rename = "recommend", default = "zero_count")]
    pub recommend_count: String,

    pub link: String,
}

fn unknown_author() -> String {
    "Unknown".to_string()
}

fn zero_count() -> String {
    "0".to_string()
}

// =============================================================================
// Request / Response
// =============================================================================

/// One fetch against the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub gallery_source: String,
    pub keyword: String,
    /// Remote page number (1-based); only advanced when no cursor is available
    pub page: usize,
    pub cursor: Option<SearchCursor>,
    /// Upstream blocks the backend should walk for this request
    pub batch_size: usize,
}

impl SearchRequest {
    #[must_use]
    pub fn new(
        query: &SearchQuery,
        page: usize,
        cursor: Option<SearchCursor>,
        batch_size: usize,
    ) -> Self {
        Self {
            gallery_source: query.gallery_source().to_string(),
            keyword: query.keyword().to_string(),
            page,
            cursor,
            batch_size,
        }
    }
}

/// Records returned by one fetch plus the cursor to continue from
///
/// `next_cursor == None` means the backend has no further continuation for
/// this query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBatch {
    #[serde(rename = "posts", default)]
    pub records: Vec<ResultRecord>,

    #[serde(rename = "next_search_pos", default)]
    pub next_cursor: Option<SearchCursor>,
}

impl SearchBatch {
    #[must_use]
    pub fn new(records: Vec<ResultRecord>, next_cursor: Option<SearchCursor>) -> Self {
        Self {
            records,
            next_cursor,
        }
    }
}

/// A gallery listed by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    pub id: String,
    pub name: String,
}

impl Gallery {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
