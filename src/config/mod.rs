//! Configuration module for gallery search
//!
//! This module provides `GalleryClientConfig` and its type-safe builder for
//! reaching the backend, plus `SessionConfig` for batching and windowing.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{GalleryClientConfigBuilder, WithEndpoint};
pub use env::{
    ENV_BATCH_SIZE, ENV_ENDPOINT, ENV_PAGE_SIZE, client_config_from_env, client_config_from_vars,
    session_config_from_env, session_config_from_vars,
};
pub use types::{ConfigError, GalleryClientConfig, SessionConfig};
