//! Remote gallery search contracts
//!
//! The session only ever talks to a [`SearchProvider`]; the terminal driver
//! additionally uses a [`GalleryDirectory`] to look up gallery ids.
//! [`HttpBackend`] implements both against the JSON backend.

mod errors;
mod http;
mod types;

// Re-export public types
pub use errors::{ProviderError, ProviderResult};
pub use http::HttpBackend;
pub use types::{Gallery, ResultRecord, SearchBatch, SearchCursor, SearchQuery, SearchRequest};

use std::future::Future;
use std::sync::Arc;

use crate::utils::PRESET_GALLERIES;

/// Source of search batches
///
/// One call is one request: `page` and `cursor` are forwarded untouched and
/// the returned `next_cursor` is handed back verbatim on the next
/// continuation.
pub trait SearchProvider: Send + Sync {
    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = ProviderResult<SearchBatch>> + Send;
}

impl<P: SearchProvider> SearchProvider for Arc<P> {
    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = ProviderResult<SearchBatch>> + Send {
        (**self).fetch(request)
    }
}

/// Lookup of gallery ids by name
pub trait GalleryDirectory: Send + Sync {
    fn search_galleries(
        &self,
        keyword: &str,
    ) -> impl Future<Output = ProviderResult<Vec<Gallery>>> + Send;

    /// Galleries offered without a lookup
    fn presets(&self) -> Vec<Gallery> {
        preset_galleries()
    }
}

/// Built-in preset galleries
#[must_use]
pub fn preset_galleries() -> Vec<Gallery> {
    PRESET_GALLERIES
        .iter()
        .map(|(id, name)| Gallery::new(*id, *name))
        .collect()
}
