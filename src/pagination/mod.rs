//! Pure client-side pagination
//!
//! No I/O and no state: the session feeds in its buffer and window index and
//! gets back the visible slice and the selector layout.

pub mod range;
pub mod window;

pub use range::{PageToken, page_range, page_range_for_count, render_page_range};
pub use window::{clamp_window, page_count, slice};
