//! Tests for slicing the accumulated buffer into client windows

use kodegen_tools_gallery_search::pagination::{clamp_window, page_count, slice};
use proptest::prelude::*;

mod common;

use common::{records, titles};

#[test]
fn test_first_and_last_window() {
    let buffer = records("r", 23);

    assert_eq!(titles(slice(&buffer, 1, 10)).len(), 10);
    assert_eq!(slice(&buffer, 1, 10)[0].title, "r-1");
    assert_eq!(titles(slice(&buffer, 3, 10)), vec!["r-21", "r-22", "r-23"]);
}

#[test]
fn test_empty_buffer_yields_empty_window() {
    let buffer = records("r", 0);

    assert_eq!(page_count(buffer.len(), 10), 1);
    assert!(slice(&buffer, 1, 10).is_empty());
}

#[test]
fn test_out_of_range_window_is_empty() {
    let buffer = records("r", 10);

    assert!(slice(&buffer, 2, 10).is_empty());
    assert!(slice(&buffer, 0, 10).is_empty());
}

#[test]
fn test_clamp_window() {
    assert_eq!(clamp_window(0, 5), 1);
    assert_eq!(clamp_window(3, 5), 3);
    assert_eq!(clamp_window(9, 5), 5);
    assert_eq!(clamp_window(9, 0), 1);
}

proptest! {
    #[test]
    fn slice_is_idempotent_and_leaves_buffer_alone(
        len in 0usize..120,
        window in 0usize..20,
        page_size in 0usize..15,
    ) {
        let buffer: Vec<usize> = (0..len).collect();
        let original = buffer.clone();

        let first = slice(&buffer, window, page_size).to_vec();
        let second = slice(&buffer, window, page_size).to_vec();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&buffer, &original);
        prop_assert!(first.len() <= page_size);
    }

    #[test]
    fn windows_tile_the_buffer(len in 0usize..120, page_size in 1usize..15) {
        let buffer: Vec<usize> = (0..len).collect();
        let joined: Vec<usize> = (1..=page_count(len, page_size))
            .flat_map(|w| slice(&buffer, w, page_size).to_vec())
            .collect();
        prop_assert_eq!(joined, buffer);
    }
}
