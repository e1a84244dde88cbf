//! Tests for the page selector layout

use kodegen_tools_gallery_search::pagination::{
    PageToken, page_count, page_range, page_range_for_count, render_page_range,
};
use proptest::prelude::*;

use PageToken::{Ellipsis as E, Page as P};

fn pages_of(tokens: &[PageToken]) -> Vec<usize> {
    tokens.iter().filter_map(PageToken::page).collect()
}

#[test]
fn test_hundred_pages_middle() {
    assert_eq!(
        page_range_for_count(100, 50),
        vec![P(1), E, P(48), P(49), P(50), P(51), P(52), E, P(100)]
    );
}

#[test]
fn test_ten_pages_first() {
    assert_eq!(
        page_range_for_count(10, 1),
        vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), E, P(10)]
    );
}

#[test]
fn test_empty_buffer_has_one_page() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_range(0, 10, 1), vec![P(1)]);
}

#[test]
fn test_eight_pages_boundaries() {
    // left edge still within reach of page 1: no left dots
    assert_eq!(
        page_range_for_count(8, 4),
        vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), E, P(8)]
    );
    // right edge reaches the last page: no right dots
    assert_eq!(
        page_range_for_count(8, 5),
        vec![P(1), E, P(2), P(3), P(4), P(5), P(6), P(7), P(8)]
    );
}

#[test]
fn test_first_switch_to_both_sides() {
    assert_eq!(
        page_range_for_count(20, 5),
        vec![P(1), E, P(3), P(4), P(5), P(6), P(7), E, P(20)]
    );
    assert_eq!(
        page_range_for_count(20, 16),
        vec![P(1), E, P(14), P(15), P(16), P(17), P(18), E, P(20)]
    );
    assert_eq!(
        page_range_for_count(20, 17),
        vec![P(1), E, P(14), P(15), P(16), P(17), P(18), P(19), P(20)]
    );
}

#[test]
fn test_current_out_of_range_is_clamped() {
    assert_eq!(page_range_for_count(100, 0), page_range_for_count(100, 1));
    assert_eq!(
        page_range_for_count(100, 500),
        vec![P(1), E, P(94), P(95), P(96), P(97), P(98), P(99), P(100)]
    );
}

#[test]
fn test_item_counts_map_to_pages() {
    assert_eq!(page_range(70, 10, 1).len(), 7);
    assert_eq!(
        page_range(71, 10, 1),
        vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), E, P(8)]
    );
}

#[test]
fn test_render_middle_selector() {
    let tokens = page_range_for_count(100, 50);
    assert_eq!(
        render_page_range(&tokens, 50, 100),
        "< 1 ... 48 49 [50] 51 52 ... 100 >"
    );
}

#[test]
fn test_render_last_page_disables_next() {
    let tokens = page_range_for_count(3, 3);
    assert_eq!(render_page_range(&tokens, 3, 3), "< 1 2 [3]  ");
}

proptest! {
    #[test]
    fn small_counts_list_every_page(pages in 1usize..=7, current in 0usize..20) {
        let expected: Vec<PageToken> = (1..=pages).map(P).collect();
        prop_assert_eq!(page_range_for_count(pages, current), expected);
    }

    #[test]
    fn large_counts_keep_edges_and_collapse_each_side_once(
        (pages, current) in (8usize..2_000).prop_flat_map(|p| (Just(p), 1..=p))
    ) {
        let tokens = page_range_for_count(pages, current);

        prop_assert_eq!(tokens.first(), Some(&P(1)));
        prop_assert_eq!(tokens.last(), Some(&P(pages)));

        let position = tokens.iter().position(|t| *t == P(current));
        prop_assert!(position.is_some(), "current page missing from {:?}", tokens);
        let position = position.unwrap();

        let left = tokens[..position].iter().filter(|t| t.is_ellipsis()).count();
        let right = tokens[position..].iter().filter(|t| t.is_ellipsis()).count();
        prop_assert!(left <= 1);
        prop_assert!(right <= 1);

        let numbers = pages_of(&tokens);
        prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(tokens.len() <= 9);
    }

    #[test]
    fn right_edge_never_exceeds_page_count(pages in 1usize..500, current in 0usize..1_000) {
        let tokens = page_range_for_count(pages, current);
        prop_assert!(pages_of(&tokens).iter().all(|n| (1..=pages).contains(n)));
    }
}
