//! Type-safe builder for `GalleryClientConfig` using the typestate pattern
//!
//! The endpoint is the only required field; `build()` does not exist until it
//! has been set.

use std::marker::PhantomData;

use url::Url;

use super::types::{ConfigError, GalleryClientConfig};
use crate::utils::{DEFAULT_REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Parse and normalize a backend endpoint
///
/// Adds `http://` when no scheme is present and guarantees a trailing `/` on
/// the path so that `Url::join("search")` keeps any base path prefix.
fn normalize_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

// Type states for the builder
pub struct WithEndpoint;

pub struct GalleryClientConfigBuilder<State = ()> {
    pub(crate) endpoint: Option<String>,
    pub(crate) request_timeout_secs: u64,
    pub(crate) user_agent: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for GalleryClientConfigBuilder<()> {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl GalleryClientConfig {
    /// Create a builder for configuring a `GalleryClientConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> GalleryClientConfigBuilder<()> {
        GalleryClientConfigBuilder::default()
    }
}

impl GalleryClientConfigBuilder<()> {
    pub fn endpoint(self, endpoint: impl Into<String>) -> GalleryClientConfigBuilder<WithEndpoint> {
        GalleryClientConfigBuilder {
            endpoint: Some(endpoint.into()),
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            _phantom: PhantomData,
        }
    }
}

impl GalleryClientConfigBuilder<WithEndpoint> {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEndpoint` for unparseable endpoints and
    /// `ConfigError::InvalidTimeout` for a zero timeout.
    pub fn build(self) -> Result<GalleryClientConfig, ConfigError> {
        let raw = self.endpoint.unwrap_or_default();
        let endpoint = normalize_endpoint(&raw)?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(GalleryClientConfig {
            endpoint,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
        })
    }
}
