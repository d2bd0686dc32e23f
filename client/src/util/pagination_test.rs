use super::*;
use PageItem::{Ellipsis, Page};

#[test]
fn middle_page_shows_both_ellipses() {
    assert_eq!(
        page_window(10, 20),
        vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
    );
}

#[test]
fn first_page_has_no_leading_items() {
    assert_eq!(page_window(1, 20), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]);
}

#[test]
fn last_page_shifts_window_left() {
    assert_eq!(page_window(20, 20), vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]);
}

#[test]
fn adjacent_edge_pages_skip_ellipsis() {
    assert_eq!(page_window(4, 7), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]);
}

#[test]
fn few_pages_show_all() {
    assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(page_window(1, 1), vec![Page(1)]);
}

#[test]
fn no_pages_renders_nothing() {
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_window(0, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(page_window(99, 6), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]);
}

#[test]
fn last_of_huge_page_count_does_not_overflow() {
    let total = u32::MAX;
    assert_eq!(
        page_window(total, total),
        vec![Page(1), Ellipsis, Page(total - 4), Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
    );
}

#[test]
fn saturated_upstream_count_renders_a_window() {
    use crate::state::listing::PageNumberPaging;
    let paging = PageNumberPaging { current_page: u32::MAX, per_page: 10, total_found: u64::MAX };
    let items = page_window(paging.current_page, paging.total_pages());
    assert_eq!(items.last(), Some(&Page(u32::MAX)));
    assert_eq!(items.len(), 7);
}
