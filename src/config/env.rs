//! Environment overrides for the driver binary
//!
//! Every variable is optional; missing ones fall back to the constants in
//! `utils::constants`. Lookups go through a closure so tests never touch the
//! process environment.

use super::types::{ConfigError, GalleryClientConfig, SessionConfig};
use crate::utils::{DEFAULT_BATCH_SIZE, DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};

pub const ENV_ENDPOINT: &str = "GALLERY_SEARCH_ENDPOINT";
pub const ENV_PAGE_SIZE: &str = "GALLERY_SEARCH_PAGE_SIZE";
pub const ENV_BATCH_SIZE: &str = "GALLERY_SEARCH_BATCH_SIZE";

fn parse_usize<F>(lookup: &F, name: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: name.to_string(),
                value,
            }),
        None => Ok(default),
    }
}

/// Build a `GalleryClientConfig` from variables provided by `lookup`
///
/// # Errors
///
/// Returns `ConfigError` if the endpoint is invalid.
pub fn client_config_from_vars<F>(lookup: F) -> Result<GalleryClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint = lookup(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    GalleryClientConfig::builder().endpoint(endpoint).build()
}

/// Build a `SessionConfig` from variables provided by `lookup`
///
/// # Errors
///
/// Returns `ConfigError` if a value is not a number or out of range.
pub fn session_config_from_vars<F>(lookup: F) -> Result<SessionConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let page_size = parse_usize(&lookup, ENV_PAGE_SIZE, DEFAULT_PAGE_SIZE)?;
    let batch_size = parse_usize(&lookup, ENV_BATCH_SIZE, DEFAULT_BATCH_SIZE)?;
    SessionConfig::new(page_size, batch_size)
}

/// Read `GALLERY_SEARCH_ENDPOINT` from the process environment
///
/// # Errors
///
/// See [`client_config_from_vars`].
pub fn client_config_from_env() -> Result<GalleryClientConfig, ConfigError> {
    client_config_from_vars(|name| std::env::var(name).ok())
}

/// Read `GALLERY_SEARCH_PAGE_SIZE` and `GALLERY_SEARCH_BATCH_SIZE`
///
/// # Errors
///
/// See [`session_config_from_vars`].
pub fn session_config_from_env() -> Result<SessionConfig, ConfigError> {
    session_config_from_vars(|name| std::env::var(name).ok())
}
