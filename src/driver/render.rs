//! Plain-text rendering of a session snapshot

use std::fmt::Write;

use crate::gallery_search::Gallery;
use crate::pagination::render_page_range;
use crate::session::SearchSnapshot;

/// Render the visible window, selector and status lines
#[must_use]
pub fn render_snapshot(snapshot: &SearchSnapshot) -> String {
    let mut out = String::new();

    if let Some(error) = &snapshot.last_error {
        let _ = writeln!(out, "! {error}");
    }

    if snapshot.is_loading {
        let _ = writeln!(out, "searching...");
        return out;
    }

    if let Some(query) = &snapshot.query {
        let _ = write!(out, "{query}");
        if let Some(label) = snapshot.continuation_label {
            let _ = write!(out, "  [blocks {label}]");
        }
        let _ = writeln!(out, "  {} results", snapshot.total_items);
    }

    if snapshot.visible_records.is_empty() {
        if snapshot.has_searched {
            let _ = writeln!(out, "(no results)");
        }
    } else {
        for record in &snapshot.visible_records {
            let _ = writeln!(
                out,
                "{:<48}  {:<14} {:>11}  views {:>6}  rec {:>4}",
                truncate(&record.title, 48),
                truncate(&record.author, 14),
                record.date,
                record.view_count,
                record.recommend_count,
            );
            let _ = writeln!(out, "    {}", record.link);
        }
    }

    if snapshot.has_searched {
        let _ = writeln!(
            out,
            "{}",
            render_page_range(
                &snapshot.page_range,
                snapshot.current_window_index,
                snapshot.page_count
            )
        );
    }

    out
}

/// Render a gallery list, one `id  name` per line
#[must_use]
pub fn render_galleries(galleries: &[Gallery]) -> String {
    if galleries.is_empty() {
        return "(no galleries found)\n".to_string();
    }
    let width = galleries.iter().map(|g| g.id.len()).max().unwrap_or(0);
    galleries
        .iter()
        .map(|g| format!("{:<width$}  {}\n", g.id, g.name))
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        let snapshot = SearchSnapshot {
            query: None,
            visible_records: Vec::new(),
            current_window_index: 1,
            page_count: 1,
            page_range: Vec::new(),
            continuation_label: None,
            is_loading: false,
            last_error: None,
            has_searched: false,
            total_items: 0,
        };
        assert_eq!(render_snapshot(&snapshot), "");
    }
}
