//! Leptos ListView Utilities
//!
//! Shared search + pagination state for "manage X" table screens.
//! Derives the visible slice and the page-button row (with ellipsis)
//! deterministically from `{items, search term, current page, page size}`.

use leptos::prelude::*;

/// Maximum numbered buttons shown before the row collapses to
/// `1 … window … last`.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// One entry in the rendered page-button row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// List state signals (search term + current page)
#[derive(Clone, Copy)]
pub struct ListSignals {
    pub search_read: ReadSignal<String>,
    pub search_write: WriteSignal<String>,
    pub page_read: ReadSignal<usize>,
    pub page_write: WriteSignal<usize>,
}

pub fn create_list_signals() -> ListSignals {
    let (search_read, search_write) = signal(String::new());
    let (page_read, page_write) = signal(1usize);
    ListSignals {
        search_read,
        search_write,
        page_read,
        page_write,
    }
}

impl ListSignals {
    /// Update the search term. Always snaps back to page 1 so the
    /// filtered view never starts on a page that no longer exists.
    pub fn set_search_term(&self, term: String) {
        self.search_write.set(term);
        self.page_write.set(1);
    }

    /// Jump to page `n`, clamped to `[1, total_pages]`.
    pub fn set_page(&self, n: usize, total_pages: usize) {
        self.page_write.set(clamp_page(n, total_pages));
    }

    pub fn next_page(&self, total_pages: usize) {
        let current = self.page_read.get_untracked();
        self.set_page(current + 1, total_pages);
    }

    pub fn prev_page(&self, total_pages: usize) {
        let current = self.page_read.get_untracked();
        self.set_page(current.saturating_sub(1), total_pages);
    }
}

fn clamp_page(n: usize, total_pages: usize) -> usize {
    n.clamp(1, total_pages.max(1))
}

/// Case-insensitive substring filter over the fields `fields_of` designates.
/// An empty term keeps every item; order is never changed.
pub fn filter_items<T: Clone>(
    items: &[T],
    term: &str,
    fields_of: impl Fn(&T) -> Vec<String>,
) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields_of(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Zero-based offset of the first item on `current_page`
/// (row numbering and the "Showing X to Y of Z" line)
pub fn first_index(current_page: usize, page_size: usize) -> usize {
    (current_page - 1) * page_size
}

/// The slice shown on `current_page`. A page past the end yields an
/// empty vec rather than panicking; callers are expected to clamp first.
pub fn page_slice<T: Clone>(filtered: &[T], current_page: usize, page_size: usize) -> Vec<T> {
    let start = first_index(current_page.max(1), page_size);
    if start >= filtered.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(filtered.len());
    filtered[start..end].to_vec()
}

/// Page-button row for the pagination bar.
///
/// All pages when `total_pages <= MAX_PAGE_BUTTONS`. Otherwise page 1,
/// a window of `current_page ± 1` clamped to `[2, total_pages - 1]`, and
/// the last page, with one ellipsis per side where the window leaves a gap.
pub fn page_labels(total_pages: usize, current_page: usize) -> Vec<PageLabel> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let mut labels = vec![PageLabel::Page(1)];

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);

    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }
    for page in start..=end {
        labels.push(PageLabel::Page(page));
    }
    if end < total_pages - 1 {
        labels.push(PageLabel::Ellipsis);
    }

    labels.push(PageLabel::Page(total_pages));
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        email: String,
    }

    fn make_row(name: &str, email: &str) -> Row {
        Row {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn row_fields(row: &Row) -> Vec<String> {
        vec![row.name.clone(), row.email.clone()]
    }

    #[test]
    fn test_empty_term_keeps_everything_in_order() {
        let rows = vec![
            make_row("Charlie", "c@example.com"),
            make_row("Alice", "a@example.com"),
            make_row("Bob", "b@example.com"),
        ];
        let filtered = filter_items(&rows, "", row_fields);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let rows = vec![make_row("Jackie", "jackie@example.com")];
        let filtered = filter_items(&rows, "jack", row_fields);
        assert_eq!(filtered.len(), 1);

        let filtered = filter_items(&rows, "ACKI", row_fields);
        assert_eq!(filtered.len(), 1);

        let filtered = filter_items(&rows, "nope", row_fields);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_matches_any_designated_field() {
        let rows = vec![
            make_row("Alice", "alice@first.com"),
            make_row("Bob", "bob@second.com"),
        ];
        let filtered = filter_items(&rows, "second", row_fields);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bob");
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 10), 2);
    }

    #[test]
    fn test_page_slice_windows() {
        let rows: Vec<usize> = (0..12).collect();
        // 12 items, page size 10: page 1 shows 10, page 2 shows 2
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10), vec![10, 11]);
    }

    #[test]
    fn test_page_slice_never_exceeds_page_size() {
        let rows: Vec<usize> = (0..37).collect();
        for page in 1..=4 {
            assert!(page_slice(&rows, page, 10).len() <= 10);
        }
    }

    #[test]
    fn test_page_slice_past_the_end_is_empty() {
        let rows: Vec<usize> = (0..5).collect();
        assert!(page_slice(&rows, 3, 5).is_empty());
        assert!(page_slice(&[] as &[usize], 1, 5).is_empty());
    }

    #[test]
    fn test_first_index_offsets() {
        assert_eq!(first_index(1, 10), 0);
        assert_eq!(first_index(3, 5), 10);
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(2, 4), 2);
        // empty list still has a "page 1"
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_set_search_term_resets_to_first_page() {
        let list = create_list_signals();
        list.set_page(4, 9);
        assert_eq!(list.page_read.get_untracked(), 4);

        list.set_search_term("jack".to_string());
        assert_eq!(list.search_read.get_untracked(), "jack");
        assert_eq!(list.page_read.get_untracked(), 1);
    }

    #[test]
    fn test_set_page_clamps_to_range() {
        let list = create_list_signals();
        list.set_page(99, 4);
        assert_eq!(list.page_read.get_untracked(), 4);

        list.set_page(0, 4);
        assert_eq!(list.page_read.get_untracked(), 1);

        list.next_page(4);
        assert_eq!(list.page_read.get_untracked(), 2);
        list.prev_page(4);
        list.prev_page(4);
        assert_eq!(list.page_read.get_untracked(), 1);
    }

    #[test]
    fn test_page_labels_small_counts_show_all() {
        assert_eq!(
            page_labels(2, 1),
            vec![PageLabel::Page(1), PageLabel::Page(2)]
        );
        assert_eq!(page_labels(5, 3).len(), 5);
        assert!(!page_labels(5, 3).contains(&PageLabel::Ellipsis));
    }

    #[test]
    fn test_page_labels_near_start_has_trailing_ellipsis_only() {
        // current=2 of 10: 1 [2] 3 ... 10
        assert_eq!(
            page_labels(10, 2),
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Page(3),
                PageLabel::Ellipsis,
                PageLabel::Page(10),
            ]
        );
        // current=1: window clamps to [2, 2]
        assert_eq!(
            page_labels(10, 1),
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Ellipsis,
                PageLabel::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_labels_near_end_has_leading_ellipsis_only() {
        assert_eq!(
            page_labels(10, 9),
            vec![
                PageLabel::Page(1),
                PageLabel::Ellipsis,
                PageLabel::Page(8),
                PageLabel::Page(9),
                PageLabel::Page(10),
            ]
        );
    }

    #[test]
    fn test_page_labels_middle_has_one_ellipsis_per_side() {
        let labels = page_labels(20, 10);
        assert_eq!(
            labels,
            vec![
                PageLabel::Page(1),
                PageLabel::Ellipsis,
                PageLabel::Page(9),
                PageLabel::Page(10),
                PageLabel::Page(11),
                PageLabel::Ellipsis,
                PageLabel::Page(20),
            ]
        );
    }

    #[test]
    fn test_page_labels_always_anchor_first_and_last() {
        for total in 6..40 {
            for current in 1..=total {
                let labels = page_labels(total, current);
                assert_eq!(labels.first(), Some(&PageLabel::Page(1)));
                assert_eq!(labels.last(), Some(&PageLabel::Page(total)));
                let ellipses = labels
                    .iter()
                    .filter(|l| **l == PageLabel::Ellipsis)
                    .count();
                assert!(ellipses <= 2);
            }
        }
    }
}
