use super::*;

fn article(id: &str) -> Article {
    Article {
        id: id.to_owned(),
        title: format!("Title {id}"),
        image_url: None,
        categories: Vec::new(),
        published_at: String::new(),
        source_url: String::new(),
        description: None,
        creator: None,
    }
}

fn page<M>(ids: &[&str], meta: M) -> Result<FetchedPage<M>, ApiError> {
    Ok(FetchedPage { items: ids.iter().map(|id| article(id)).collect(), meta })
}

// =============================================================
// View states
// =============================================================

#[test]
fn new_listing_is_loading() {
    let state = ArticleTableState::default();
    assert_eq!(state.view(), ListingView::Loading);
    assert!(state.is_loading());
}

#[test]
fn completed_fetch_with_items_shows_items() {
    let mut state = ArticleTableState::default();
    let ticket = state.begin_fetch(1, "");
    assert!(state.complete(&ticket, page(&["a", "b"], 25)));
    assert_eq!(state.view(), ListingView::Items);
    assert_eq!(state.paging.total_pages(), 3);
    assert!(!state.is_loading());
}

#[test]
fn completed_empty_fetch_is_distinct_from_error() {
    let mut state = ArticleTableState::default();
    let ticket = state.begin_fetch(1, "nothing matches");
    state.complete(&ticket, page(&[], 0));
    assert_eq!(state.view(), ListingView::Empty);
}

#[test]
fn failed_fetch_shows_error_message() {
    let mut state = FeedState::default();
    let ticket = state.begin_search("tech");
    state.complete(&ticket, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.view(), ListingView::Error("network error: offline".to_owned()));
}

#[test]
fn refetch_after_error_returns_to_loading() {
    let mut state = FeedState::default();
    let ticket = state.begin_search("tech");
    state.complete(&ticket, Err(ApiError::Unavailable));
    state.begin_search("tech");
    assert_eq!(state.view(), ListingView::Loading);
}

// =============================================================
// Stale-response rejection
// =============================================================

#[test]
fn slow_first_page_does_not_overwrite_second_page() {
    let mut state = ArticleTableState::default();
    let page_one = state.begin_fetch(1, "");
    let page_two = state.begin_fetch(2, "");

    assert!(state.complete(&page_two, page(&["p2"], 30)));
    assert!(!state.complete(&page_one, page(&["p1"], 30)));

    assert_eq!(state.paging.current_page, 2);
    assert_eq!(state.items[0].id, "p2");
}

#[test]
fn stale_query_response_is_discarded_while_newer_is_pending() {
    let mut state = ArticleTableState::default();
    let old = state.begin_search("ru");
    let _new = state.begin_search("rust");

    assert!(!state.complete(&old, page(&["old"], 1)));
    assert_eq!(state.view(), ListingView::Loading);
    assert!(state.items.is_empty());
    assert_eq!(state.query, "rust");
}

#[test]
fn stale_error_does_not_clobber_fresh_items() {
    let mut state = FeedState::default();
    let old = state.begin_search("a");
    let new = state.begin_search("b");
    state.complete(&new, page(&["b1"], None));
    state.complete(&old, Err(ApiError::Network("late".to_owned())));
    assert_eq!(state.view(), ListingView::Items);
}

#[test]
fn search_resets_to_first_page() {
    let mut state = ArticleTableState::default();
    let t = state.begin_fetch(3, "");
    state.complete(&t, page(&["x"], 100));
    let t = state.begin_search("rust");
    assert_eq!(t.position, 1);
    assert_eq!(t.query, "rust");
}

// =============================================================
// Paging protocols
// =============================================================

#[test]
fn page_number_paging_edges() {
    let mut paging = PageNumberPaging::new(10);
    assert_eq!(paging.total_pages(), 0);
    assert_eq!(paging.previous_page(), None);
    assert_eq!(paging.next_page(), None);

    paging.settle(1, 21);
    assert_eq!(paging.total_pages(), 3);
    assert_eq!(paging.previous_page(), None);
    assert_eq!(paging.next_page(), Some(2));

    paging.settle(3, 21);
    assert_eq!(paging.previous_page(), Some(2));
    assert_eq!(paging.next_page(), None);
}

#[test]
fn page_number_paging_never_divides_by_zero() {
    let paging = PageNumberPaging::new(0);
    assert_eq!(paging.per_page, 1);
}

#[test]
fn cursor_paging_follows_next_cursor() {
    let mut state = FeedState::default();
    let first = state.begin_search("tech");
    assert_eq!(first.position, None);
    state.complete(&first, page(&["f1"], Some("c2".to_owned())));
    assert!(state.paging.has_more());

    let next = state.paging.next_position().map(|pos| state.begin_fetch(pos, "tech"));
    let next = next.unwrap();
    assert_eq!(next.position.as_deref(), Some("c2"));
    state.complete(&next, page(&["f2"], None));

    assert_eq!(state.paging.current.as_deref(), Some("c2"));
    assert!(!state.paging.has_more());
    assert_eq!(state.paging.next_position(), None);
}
