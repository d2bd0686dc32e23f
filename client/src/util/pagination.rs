//! Numbered page-button window for the admin table.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Most numbered buttons shown around the current page.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// One slot in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Buttons to render for `current` out of `total_pages`.
///
/// The window holds up to [`MAX_PAGE_BUTTONS`] pages centred on `current`,
/// shifted to stay inside `1..=total_pages`. Page 1 and the last page are
/// always reachable; an ellipsis marks any gap between them and the window.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let end = start.saturating_add(MAX_PAGE_BUTTONS - 1).min(total_pages);
    if end - start + 1 < MAX_PAGE_BUTTONS {
        start = end.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);
    }

    let mut items = Vec::with_capacity(MAX_PAGE_BUTTONS as usize + 4);
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}
