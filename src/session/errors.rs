//! Error types for session operations

use thiserror::Error;

use crate::gallery_search::ProviderError;
use crate::utils::FETCH_FAILED_MESSAGE;

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Error types for session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Query rejected before any fetch; no state was touched
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Continuation requested while a fetch is still outstanding
    #[error("A search request is already in progress")]
    Busy,

    /// Continuation requested before any search completed for the active query
    #[error("No completed search to continue")]
    NotStarted,

    /// Backend call failed; buffer and cursor keep their last good values
    #[error("Search request failed: {0}")]
    Transport(#[from] ProviderError),
}

impl SessionError {
    /// Message suitable for showing to the user
    ///
    /// Transport failures collapse to one generic message; the detailed
    /// error goes to the log instead.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Transport(_) => FETCH_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the failure came from the backend rather than the caller
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SessionError::Transport(_))
    }
}
