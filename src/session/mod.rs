//! Search session: the single owner of results for the active query
//!
//! A session drives a [`SearchProvider`], keeps the accumulated buffer, the
//! backend cursor and the continuation count, and exposes a
//! [`SearchSnapshot`] for rendering.
//!
//! # Fetch policy
//! - `start_search` replaces everything gathered so far and fetches remote
//!   page 1 without a cursor.
//! - `continue_search` appends. It resumes from the cursor when the backend
//!   handed one out, otherwise it asks for the next remote page by number.
//!
//! # Concurrency
//! At most one fetch is applied at a time. A continuation requested while a
//! fetch is outstanding is rejected with [`SessionError::Busy`]. A new search
//! supersedes whatever is outstanding: every fetch carries the generation it
//! was issued under and its result is dropped if a newer search started in
//! the meantime. The state lock is never held across the fetch.

mod errors;
mod state;
mod validation;

pub use errors::{SessionError, SessionResult};
pub use state::{ContinuationLabel, FetchOutcome, QueryState, SearchSnapshot};
pub use validation::{is_valid_gallery_id, validate_query};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::gallery_search::{
    ResultRecord, SearchCursor, SearchProvider, SearchQuery, SearchRequest,
};
use crate::pagination::{clamp_window, page_count, page_range, slice};
use crate::utils::FETCH_FAILED_MESSAGE;
use state::SessionState;

/// Clears the in-flight marker if a fetch future is dropped before completing
///
/// Without this a cancelled fetch would leave the session permanently busy.
struct InFlightGuard<'a> {
    state: &'a Mutex<SessionState>,
    generation: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.in_flight == Some(self.generation) {
            state.in_flight = None;
        }
    }
}

/// Session over one search provider
pub struct SearchSession<P> {
    provider: P,
    config: SessionConfig,
    state: Mutex<SessionState>,
}

impl<P: SearchProvider> SearchSession<P> {
    #[must_use]
    pub fn new(provider: P, config: SessionConfig) -> Self {
        Self {
            provider,
            config,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Session with the default page and batch sizes
    #[must_use]
    pub fn with_defaults(provider: P) -> Self {
        Self::new(provider, SessionConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Start a new search, discarding everything gathered for the previous query
    ///
    /// The buffer is emptied and the counters reset before the fetch is
    /// issued, so a failed search leaves an empty buffer behind.
    ///
    /// # Errors
    ///
    /// - `SessionError::InvalidQuery` if the query fails validation (nothing is reset)
    /// - `SessionError::Transport` if the backend call fails
    pub async fn start_search(&self, query: SearchQuery) -> SessionResult<FetchOutcome> {
        validate_query(&query)?;

        let (generation, request) = {
            let mut state = self.state.lock();
            state.generation += 1;
            let generation = state.generation;

            if let Some(previous) = state.in_flight {
                debug!(previous, generation, "New search supersedes outstanding fetch");
            }

            state.in_flight = Some(generation);
            state.last_error = None;
            state.current = Some(QueryState::new(query.clone()));

            let request = SearchRequest::new(&query, 1, None, self.config.batch_size());
            (generation, request)
        };

        info!(query = %query, generation, "Starting search");

        let _guard = InFlightGuard {
            state: &self.state,
            generation,
        };
        let result = self.provider.fetch(request).await;

        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.generation != generation {
            debug!(generation, current = state.generation, "Discarding stale search response");
            return Ok(FetchOutcome::Superseded);
        }
        state.in_flight = None;

        match result {
            Ok(batch) => {
                let records = batch.records.len();
                if let Some(current) = state.current.as_mut() {
                    current.buffer = batch.records;
                    current.cursor = batch.next_cursor;
                    current.last_remote_page = 1;
                    current.started = true;
                }
                state.has_searched = true;
                info!(records, generation, "Search applied");
                Ok(FetchOutcome::Applied { records })
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), generation, "Search failed");
                state.last_error = Some(FETCH_FAILED_MESSAGE.to_string());
                Err(SessionError::Transport(e))
            }
        }
    }

    /// Fetch the next batch for the active query and append it
    ///
    /// Resumes from the backend cursor when one is available; otherwise
    /// requests `last_remote_page + 1` by number. The client window is left
    /// where it is.
    ///
    /// # Errors
    ///
    /// - `SessionError::Busy` if a fetch is outstanding
    /// - `SessionError::NotStarted` if no search has completed for the active query
    /// - `SessionError::Transport` if the backend call fails (nothing is changed)
    pub async fn continue_search(&self) -> SessionResult<FetchOutcome> {
        let (generation, request) = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            if state.in_flight.is_some() {
                return Err(SessionError::Busy);
            }
            let Some(current) = state.current.as_ref().filter(|current| current.started) else {
                return Err(SessionError::NotStarted);
            };

            let batch_size = self.config.batch_size();
            let request = match &current.cursor {
                Some(cursor) => {
                    SearchRequest::new(&current.query, 1, Some(cursor.clone()), batch_size)
                }
                None => SearchRequest::new(
                    &current.query,
                    current.last_remote_page + 1,
                    None,
                    batch_size,
                ),
            };

            state.in_flight = Some(state.generation);
            state.last_error = None;
            (state.generation, request)
        };

        let page = request.page;
        info!(
            generation,
            page,
            by_cursor = request.cursor.is_some(),
            "Continuing search"
        );

        let _guard = InFlightGuard {
            state: &self.state,
            generation,
        };
        let result = self.provider.fetch(request).await;

        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.generation != generation {
            debug!(generation, current = state.generation, "Discarding stale continuation response");
            return Ok(FetchOutcome::Superseded);
        }
        state.in_flight = None;

        match result {
            Ok(batch) => {
                let records = batch.records.len();
                if let Some(current) = state.current.as_mut() {
                    current.buffer.extend(batch.records);
                    current.cursor = batch.next_cursor;
                    current.continuation_count += 1;
                    current.last_remote_page = page;
                    info!(
                        records,
                        total = current.buffer.len(),
                        continuation = current.continuation_count,
                        "Continuation applied"
                    );
                }
                Ok(FetchOutcome::Applied { records })
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), generation, "Continuation failed");
                state.last_error = Some(FETCH_FAILED_MESSAGE.to_string());
                Err(SessionError::Transport(e))
            }
        }
    }

    /// Move to a window, clamped into `1..=page_count`; returns the new index
    pub fn set_window_index(&self, window_index: usize) -> usize {
        self.update_window(|_| window_index)
    }

    /// Move one window forward if possible; returns the new index
    pub fn next_window(&self) -> usize {
        self.update_window(|current| current.saturating_add(1))
    }

    /// Move one window back if possible; returns the new index
    pub fn previous_window(&self) -> usize {
        self.update_window(|current| current.saturating_sub(1))
    }

    fn update_window(&self, target: impl FnOnce(usize) -> usize) -> usize {
        let mut state = self.state.lock();
        let page_size = self.config.page_size();
        match state.current.as_mut() {
            Some(current) => {
                let pages = page_count(current.buffer.len(), page_size);
                let window = clamp_window(target(current.window_index), pages);
                if window != current.window_index {
                    debug!(from = current.window_index, to = window, pages, "Window moved");
                }
                current.window_index = window;
                window
            }
            None => 1,
        }
    }

    /// Copy of the accumulated buffer
    #[must_use]
    pub fn buffer(&self) -> Vec<ResultRecord> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|current| current.buffer.clone())
            .unwrap_or_default()
    }

    /// Records in the current window
    #[must_use]
    pub fn visible_records(&self) -> Vec<ResultRecord> {
        let state = self.state.lock();
        state
            .current
            .as_ref()
            .map(|current| {
                slice(&current.buffer, current.window_index, self.config.page_size()).to_vec()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn continuation_count(&self) -> usize {
        self.state
            .lock()
            .current
            .as_ref()
            .map_or(0, |current| current.continuation_count)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<SearchCursor> {
        self.state
            .lock()
            .current
            .as_ref()
            .and_then(|current| current.cursor.clone())
    }

    #[must_use]
    pub fn last_remote_page(&self) -> Option<usize> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|current| current.last_remote_page)
    }

    #[must_use]
    pub fn window_index(&self) -> usize {
        self.state
            .lock()
            .current
            .as_ref()
            .map_or(1, |current| current.window_index)
    }

    #[must_use]
    pub fn query(&self) -> Option<SearchQuery> {
        self.state
            .lock()
            .current
            .as_ref()
            .map(|current| current.query.clone())
    }

    /// Copy of the per-query state, if a search was started
    #[must_use]
    pub fn query_state(&self) -> Option<QueryState> {
        self.state.lock().current.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().in_flight.is_some()
    }

    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.state.lock().has_searched
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().last_error.clone()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Read model for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.lock();
        let page_size = self.config.page_size();

        let (query, visible_records, window, total_items, continuation_count) =
            match &state.current {
                Some(current) => (
                    Some(current.query.clone()),
                    slice(&current.buffer, current.window_index, page_size).to_vec(),
                    current.window_index,
                    current.buffer.len(),
                    current.continuation_count,
                ),
                None => (None, Vec::new(), 1, 0, 0),
            };

        let continuation_label = if state.has_searched {
            ContinuationLabel::new(continuation_count, self.config.batch_size())
        } else {
            None
        };

        SearchSnapshot {
            query,
            visible_records,
            current_window_index: window,
            page_count: page_count(total_items, page_size),
            page_range: page_range(total_items, page_size, window),
            continuation_label,
            is_loading: state.in_flight.is_some(),
            last_error: state.last_error.clone(),
            has_searched: state.has_searched,
            total_items,
        }
    }
}
