//! Page selector layout with ellipsis collapsing
//!
//! Small selectors list every page. Larger ones always keep the first and
//! last page, show `SIBLING_COUNT` pages on each side of the current one and
//! collapse the rest into an ellipsis:
//!
//! ```text
//! 1 2 3 [4] 5 6 7 ... 100
//! 1 ... 48 49 [50] 51 52 ... 100
//! 1 ... 94 95 96 [97] 98 99 100
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::window::page_count;
use crate::utils::{MAX_UNCOLLAPSED_PAGES, SIBLING_COUNT};

/// One slot in the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageToken {
    /// A selectable 1-based page number
    Page(usize),
    /// Collapsed run of pages
    Ellipsis,
}

impl PageToken {
    #[must_use]
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    #[must_use]
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

/// Selector tokens for `total_items` split into windows of `page_size`
#[must_use]
pub fn page_range(total_items: usize, page_size: usize, current: usize) -> Vec<PageToken> {
    page_range_for_count(page_count(total_items, page_size), current)
}

/// Selector tokens for a known page count
///
/// `current` is not required to be in range: values past the end clamp the
/// right edge to `pages`, values of 0 or 1 clamp the left edge to 1.
#[must_use]
pub fn page_range_for_count(pages: usize, current: usize) -> Vec<PageToken> {
    let pages = pages.max(1);

    if pages <= MAX_UNCOLLAPSED_PAGES {
        return pages_between(1, pages).collect();
    }

    let left = current.saturating_sub(SIBLING_COUNT).max(1);
    let right = current.saturating_add(SIBLING_COUNT).min(pages);

    let show_left_dots = left > 2;
    let show_right_dots = right < pages - 1;

    // first page + current + both sibling runs + one ellipsis slot
    let edge_item_count = 3 + 2 * SIBLING_COUNT;

    match (show_left_dots, show_right_dots) {
        (false, true) => pages_between(1, edge_item_count)
            .chain([PageToken::Ellipsis, PageToken::Page(pages)])
            .collect(),
        (true, false) => [PageToken::Page(1), PageToken::Ellipsis]
            .into_iter()
            .chain(pages_between(pages - edge_item_count + 1, pages))
            .collect(),
        (true, true) => [PageToken::Page(1), PageToken::Ellipsis]
            .into_iter()
            .chain(pages_between(left, right))
            .chain([PageToken::Ellipsis, PageToken::Page(pages)])
            .collect(),
        // Unreachable with the clamping above; list everything rather than nothing.
        (false, false) => pages_between(1, pages).collect(),
    }
}

fn pages_between(first: usize, last: usize) -> impl Iterator<Item = PageToken> {
    (first..=last).map(PageToken::Page)
}

/// Render selector tokens on one line with the current page bracketed
///
/// Arrows are only drawn when moving in that direction is possible.
#[must_use]
pub fn render_page_range(tokens: &[PageToken], current: usize, pages: usize) -> String {
    let mut parts = Vec::with_capacity(tokens.len() + 2);
    parts.push(if current > 1 { "<" } else { " " }.to_string());
    for token in tokens {
        match token {
            PageToken::Page(n) if *n == current => parts.push(format!("[{n}]")),
            other => parts.push(other.to_string()),
        }
    }
    parts.push(if current < pages { ">" } else { " " }.to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis as E, Page as P};

    #[test]
    fn small_counts_list_every_page() {
        assert_eq!(page_range_for_count(1, 1), vec![P(1)]);
        assert_eq!(
            page_range_for_count(7, 4),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7)]
        );
    }

    #[test]
    fn near_start_collapses_right() {
        assert_eq!(
            page_range_for_count(10, 1),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), E, P(10)]
        );
    }

    #[test]
    fn middle_collapses_both_sides() {
        assert_eq!(
            page_range_for_count(100, 50),
            vec![P(1), E, P(48), P(49), P(50), P(51), P(52), E, P(100)]
        );
    }

    #[test]
    fn near_end_collapses_left() {
        assert_eq!(
            page_range_for_count(100, 100),
            vec![P(1), E, P(94), P(95), P(96), P(97), P(98), P(99), P(100)]
        );
    }

    #[test]
    fn render_brackets_current() {
        let tokens = page_range_for_count(10, 1);
        assert_eq!(
            render_page_range(&tokens, 1, 10),
            "  [1] 2 3 4 5 6 7 ... 10 >"
        );
    }
}
