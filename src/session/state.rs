//! Session state and the read model handed to the presentation layer

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gallery_search::{ResultRecord, SearchCursor, SearchQuery};
use crate::pagination::PageToken;

/// Everything gathered for one query
///
/// Replaced as a whole by `start_search`. Continuations only ever append to
/// `buffer` and advance the cursor and counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryState {
    pub query: SearchQuery,
    pub buffer: Vec<ResultRecord>,
    pub cursor: Option<SearchCursor>,
    /// Backend continuations for this query; 1 after the initial search
    pub continuation_count: usize,
    /// 1-based client window; only the user or a new search moves it
    pub window_index: usize,
    /// Remote page used by the most recently applied fetch
    pub last_remote_page: usize,
    /// Set once the initial fetch for this query has been applied
    pub started: bool,
}

impl QueryState {
    #[must_use]
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            buffer: Vec::new(),
            cursor: None,
            continuation_count: 1,
            window_index: 1,
            last_remote_page: 1,
            started: false,
        }
    }
}

/// Mutable state behind the session lock
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// Bumped by every `start_search`
    pub(crate) generation: u64,
    /// Generation of the outstanding fetch, if any
    pub(crate) in_flight: Option<u64>,
    pub(crate) has_searched: bool,
    pub(crate) last_error: Option<String>,
    pub(crate) current: Option<QueryState>,
}

/// Human readable range covered by the continuations so far
///
/// Continuation `count` with batch size `B` covers upstream blocks
/// `(count - 1) * B + 1 ..= count * B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationLabel {
    pub count: usize,
    pub first: usize,
    pub last: usize,
}

impl ContinuationLabel {
    /// `None` for `count == 0`
    #[must_use]
    pub fn new(count: usize, batch_size: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            count,
            first: (count - 1) * batch_size + 1,
            last: count * batch_size,
        })
    }
}

impl fmt::Display for ContinuationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.first, self.last)
    }
}

/// Point-in-time view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub query: Option<SearchQuery>,
    pub visible_records: Vec<ResultRecord>,
    pub current_window_index: usize,
    pub page_count: usize,
    pub page_range: Vec<PageToken>,
    pub continuation_label: Option<ContinuationLabel>,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub has_searched: bool,
    pub total_items: usize,
}

/// Outcome of a fetch that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The batch was applied to the buffer
    Applied { records: usize },
    /// A newer search started while this fetch was outstanding; its result was dropped
    Superseded,
}
