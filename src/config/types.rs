//! Core configuration types for gallery search
//!
//! `GalleryClientConfig` describes how to reach the backend.
//! `SessionConfig` describes how fetched results are batched and windowed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::utils::{DEFAULT_BATCH_SIZE, DEFAULT_PAGE_SIZE, MAX_BATCH_SIZE};

/// Errors raised while building or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Endpoint could not be parsed as an absolute http(s) URL
    #[error("Invalid backend endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Page size must be at least one record
    #[error("Page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),

    /// Batch size outside the range the backend accepts
    #[error("Batch size must be between 1 and {max} (got {got})")]
    InvalidBatchSize { got: usize, max: usize },

    /// Request timeout of zero seconds
    #[error("Request timeout must be greater than zero")]
    InvalidTimeout,

    /// Environment variable present but not a number
    #[error("Environment variable {name} is not a valid number: '{value}'")]
    InvalidEnvValue { name: String, value: String },
}

/// Connection settings for the gallery search backend
#[derive(Debug, Clone)]
pub struct GalleryClientConfig {
    /// Backend base URL.
    ///
    /// **INVARIANT:** Always an absolute http(s) URL whose path ends in `/`,
    /// so relative endpoint paths join underneath it.
    pub(crate) endpoint: Url,

    /// Whole-request timeout in seconds
    pub(crate) request_timeout_secs: u64,

    /// `User-Agent` header value
    pub(crate) user_agent: String,
}

/// Batching and windowing settings for a `SearchSession`
///
/// Deserialization goes through [`SessionConfig::new`], so out-of-range
/// values are rejected the same way as in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionConfig")]
pub struct SessionConfig {
    /// Records per client-side window
    pub(crate) page_size: usize,

    /// Remote blocks requested per fetch (the backend's `limit`)
    pub(crate) batch_size: usize,
}

impl SessionConfig {
    /// Create a validated session configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero or `batch_size` is outside
    /// `1..=MAX_BATCH_SIZE`.
    pub fn new(page_size: usize, batch_size: usize) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::InvalidBatchSize {
                got: batch_size,
                max: MAX_BATCH_SIZE,
            });
        }
        Ok(Self {
            page_size,
            batch_size,
        })
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

#[derive(Deserialize)]
struct RawSessionConfig {
    page_size: usize,
    batch_size: usize,
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSessionConfig) -> Result<Self, Self::Error> {
        Self::new(raw.page_size, raw.batch_size)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
