//! HTTP binding for the gallery search backend
//!
//! `GET {endpoint}/search` for posts and `GET {endpoint}/galleries/search` for
//! the gallery directory. Both return JSON.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::errors::{ProviderError, ProviderResult};
use super::types::{Gallery, SearchBatch, SearchRequest};
use super::{GalleryDirectory, SearchProvider};
use crate::config::GalleryClientConfig;

const SEARCH_PATH: &str = "search";
const GALLERY_SEARCH_PATH: &str = "galleries/search";

/// Longest error body kept in `ProviderError::Status`
const MAX_ERROR_BODY_CHARS: usize = 512;

/// `reqwest`-backed client implementing both backend contracts
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: GalleryClientConfig,
}

impl HttpBackend {
    /// Create a backend client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the TLS backend cannot be initialised.
    pub fn new(config: GalleryClientConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &GalleryClientConfig {
        &self.config
    }

    /// Build the `/search` URL for a request
    ///
    /// `search_pos` is only sent when a cursor is present, matching what the
    /// backend expects for a fresh search.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidUrl` if the endpoint cannot be joined.
    pub fn search_url(&self, request: &SearchRequest) -> ProviderResult<Url> {
        let mut url = self.config.endpoint().join(SEARCH_PATH)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("gallery_id", &request.gallery_source)
                .append_pair("keyword", &request.keyword)
                .append_pair("page", &request.page.to_string())
                .append_pair("limit", &request.batch_size.to_string());
            if let Some(cursor) = &request.cursor {
                pairs.append_pair("search_pos", cursor.as_str());
            }
        }
        Ok(url)
    }

    /// Build the `/galleries/search` URL for a directory lookup
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidUrl` if the endpoint cannot be joined.
    pub fn gallery_search_url(&self, keyword: &str) -> ProviderResult<Url> {
        let mut url = self.config.endpoint().join(GALLERY_SEARCH_PATH)?;
        url.query_pairs_mut().append_pair("keyword", keyword.trim());
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ProviderResult<T> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl SearchProvider for HttpBackend {
    async fn fetch(&self, request: SearchRequest) -> ProviderResult<SearchBatch> {
        let url = self.search_url(&request)?;
        info!(
            gallery = %request.gallery_source,
            keyword = %request.keyword,
            page = request.page,
            has_cursor = request.cursor.is_some(),
            limit = request.batch_size,
            "Fetching search batch"
        );

        match self.get_json::<SearchBatch>(url).await {
            Ok(batch) => {
                info!(
                    records = batch.records.len(),
                    has_next = batch.next_cursor.is_some(),
                    "Search batch received"
                );
                Ok(batch)
            }
            Err(e) => {
                warn!(error = %e, transient = e.is_transient(), "Search batch failed");
                Err(e)
            }
        }
    }
}

impl GalleryDirectory for HttpBackend {
    async fn search_galleries(&self, keyword: &str) -> ProviderResult<Vec<Gallery>> {
        let url = self.gallery_search_url(keyword)?;
        info!(keyword = %keyword.trim(), "Searching gallery directory");
        self.get_json::<Vec<Gallery>>(url).await
    }
}
