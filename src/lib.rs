pub mod config;
pub mod driver;
pub mod gallery_search;
pub mod pagination;
pub mod session;
pub mod utils;

pub use config::{ConfigError, GalleryClientConfig, SessionConfig};
pub use gallery_search::{
    Gallery, GalleryDirectory, HttpBackend, ProviderError, ResultRecord, SearchBatch,
    SearchCursor, SearchProvider, SearchQuery, SearchRequest,
};
pub use pagination::{PageToken, page_count, page_range, slice};
pub use session::{
    ContinuationLabel, FetchOutcome, SearchSession, SearchSnapshot, SessionError, SessionResult,
};
