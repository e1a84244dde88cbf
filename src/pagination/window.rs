//! Client-side windows over the accumulated result buffer
//!
//! Window indices are 1-based and always relative to the whole buffer, never
//! to the most recent fetch.

/// Number of windows needed for `total_items`, never less than one
///
/// An empty buffer still has one (empty) window so the selector always has
/// something to show. A zero `page_size` is treated as one.
#[must_use]
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Records visible in window `window_index`
///
/// Returns `buffer[(window_index - 1) * page_size .. window_index * page_size]`
/// clipped to the buffer. Out-of-range windows, `window_index == 0` and
/// `page_size == 0` all yield an empty slice.
#[must_use]
pub fn slice<T>(buffer: &[T], window_index: usize, page_size: usize) -> &[T] {
    if window_index == 0 || page_size == 0 {
        return &[];
    }

    let Some(start) = (window_index - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= buffer.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(buffer.len());
    &buffer[start..end]
}

/// Clamp a requested window into `1..=page_count`
#[must_use]
pub fn clamp_window(window_index: usize, page_count: usize) -> usize {
    window_index.clamp(1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_clips_last_window() {
        let buffer: Vec<u32> = (1..=25).collect();
        assert_eq!(slice(&buffer, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn slice_past_end_is_empty() {
        let buffer: Vec<u32> = (1..=25).collect();
        assert!(slice(&buffer, 4, 10).is_empty());
        assert!(slice(&buffer, usize::MAX, 10).is_empty());
    }

    #[test]
    fn zero_arguments_are_empty() {
        let buffer = [1, 2, 3];
        assert!(slice(&buffer, 0, 10).is_empty());
        assert!(slice(&buffer, 1, 0).is_empty());
    }

    #[test]
    fn page_count_minimum_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }
}
