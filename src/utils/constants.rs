//! Shared configuration constants for gallery search
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default client-side page size: 10 records per window
///
/// Matches the row count of a single gallery board listing, so one window
/// reads like one page of the upstream board.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of remote blocks fetched per request
///
/// Each block is one upstream search page. The backend walks the cursor
/// chain sequentially, so larger values mean fewer round trips but a longer
/// wait before anything is shown.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Upper bound accepted by the backend for `limit`
pub const MAX_BATCH_SIZE: usize = 20;

/// Pages shown on each side of the current page in the selector
pub const SIBLING_COUNT: usize = 2;

/// Selectors with at most this many pages list every page without ellipsis
pub const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// Maximum accepted keyword length (characters, after trimming)
pub const MAX_KEYWORD_LENGTH: usize = 100;

/// Default backend endpoint
///
/// The bundled backend binds to port 8000 on localhost.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Gallery selected when the driver starts
pub const DEFAULT_GALLERY: &str = "owgenji";

/// Default request timeout in seconds
///
/// A single request may walk up to `MAX_BATCH_SIZE` upstream pages with a
/// 5 second budget each, so the client timeout has to cover the whole walk.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Preset galleries offered without a directory lookup: `(id, name)`
pub const PRESET_GALLERIES: &[(&str, &str)] = &[
    ("owgenji", "Overwatch Genji"),
    ("overwatch2", "Overwatch 2"),
    ("overwatch2_tv", "Overwatch 2 TV"),
];

/// User-visible message stored when a fetch fails
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to load search results. Please try again in a moment.";

/// User agent sent to the backend
pub const USER_AGENT: &str = concat!("kodegen-gallery-search/", env!("CARGO_PKG_VERSION"));
