//! Error types for backend calls

use thiserror::Error;

/// Result type alias for backend calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure talking to the gallery search backend
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection, timeout or protocol error from the HTTP client
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for ProviderError {
    fn from(error: anyhow::Error) -> Self {
        ProviderError::Other(error.to_string())
    }
}

impl ProviderError {
    /// Check if the failure is likely to go away on its own
    ///
    /// Nothing retries automatically; this only tags log lines so an operator
    /// can tell a flaky network from a broken backend.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Status { status, .. } => *status == 429 || *status >= 500,
            ProviderError::Decode(_) | ProviderError::InvalidUrl(_) | ProviderError::Other(_) => {
                false
            }
        }
    }
}
