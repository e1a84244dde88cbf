//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::GalleryClientConfigBuilder;

impl<State> GalleryClientConfigBuilder<State> {
    /// Set the whole-request timeout
    ///
    /// One backend request walks up to `limit` upstream pages sequentially,
    /// so this bounds the full walk, not a single upstream page.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
