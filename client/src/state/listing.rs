//! Listing controller state shared by the admin table and the public feed.
//!
//! DESIGN
//! ======
//! The two listings page differently because their upstream APIs do: the
//! admin table uses page numbers plus a total count, the feed follows an
//! opaque next-page cursor. [`Paging`] captures that difference; everything
//! else (items, query, load status, stale-response rejection) is shared in
//! [`ListingState`].
//!
//! Each fetch is stamped with a sequence number by `begin_fetch`. `complete`
//! applies a result only when its ticket is the latest issued, so a slow
//! response for an abandoned page or query never overwrites newer state.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::config::ADMIN_PAGE_SIZE;
use crate::net::error::ApiError;
use crate::net::types::{Article, FetchedPage};

/// Pagination protocol of a listing's backing API.
pub trait Paging: Clone + Default {
    /// Request-side position (page number, cursor).
    type Position: Clone + PartialEq + std::fmt::Debug;
    /// Response-side metadata (total found, next cursor).
    type Meta;

    /// Position of the first page, used when the query changes.
    fn first_position() -> Self::Position;

    /// Record a completed fetch at `position`.
    fn settle(&mut self, position: Self::Position, meta: Self::Meta);
}

/// Page-number pagination with a total match count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageNumberPaging {
    pub current_page: u32,
    pub per_page: u32,
    pub total_found: u64,
}

impl PageNumberPaging {
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self { current_page: 1, per_page: per_page.max(1), total_found: 0 }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_found.div_ceil(u64::from(self.per_page.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages()).then(|| self.current_page + 1)
    }
}

impl Default for PageNumberPaging {
    fn default() -> Self {
        Self::new(ADMIN_PAGE_SIZE)
    }
}

impl Paging for PageNumberPaging {
    type Position = u32;
    type Meta = u64;

    fn first_position() -> u32 {
        1
    }

    fn settle(&mut self, position: u32, total_found: u64) {
        self.current_page = position;
        self.total_found = total_found;
    }
}

/// Cursor pagination: the server names the next page, nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorPaging {
    /// Cursor that produced the current items (`None` for the first page).
    pub current: Option<String>,
    /// Cursor for the following page; `None` once the feed is exhausted.
    pub next_cursor: Option<String>,
}

impl CursorPaging {
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Position to request for the following page, if any.
    #[must_use]
    pub fn next_position(&self) -> Option<Option<String>> {
        self.next_cursor.clone().map(Some)
    }
}

impl Paging for CursorPaging {
    type Position = Option<String>;
    type Meta = Option<String>;

    fn first_position() -> Option<String> {
        None
    }

    fn settle(&mut self, position: Option<String>, next_cursor: Option<String>) {
        self.current = position;
        self.next_cursor = next_cursor;
    }
}

/// Identifies one issued fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket<Pos> {
    pub seq: u64,
    pub position: Pos,
    pub query: String,
}

/// Progress of the latest fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Mutually exclusive display states for a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Error(String),
    /// Completed without error, zero items.
    Empty,
    Items,
}

/// Items plus pagination for one listing view.
#[derive(Clone, Debug, Default)]
pub struct ListingState<P: Paging> {
    pub items: Vec<Article>,
    pub paging: P,
    /// Query of the latest issued fetch.
    pub query: String,
    pub status: LoadStatus,
    latest_seq: u64,
}

impl<P: Paging> ListingState<P> {
    #[must_use]
    pub fn new(paging: P) -> Self {
        Self { items: Vec::new(), paging, query: String::new(), status: LoadStatus::Idle, latest_seq: 0 }
    }

    /// Issue a fetch for `position` with `query`; supersedes any in flight.
    pub fn begin_fetch(&mut self, position: P::Position, query: &str) -> FetchTicket<P::Position> {
        self.latest_seq += 1;
        self.query = query.to_owned();
        self.status = LoadStatus::Loading;
        FetchTicket { seq: self.latest_seq, position, query: query.to_owned() }
    }

    /// Issue a fetch for the first page of a new query.
    pub fn begin_search(&mut self, query: &str) -> FetchTicket<P::Position> {
        self.begin_fetch(P::first_position(), query)
    }

    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket<P::Position>) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply a fetch result. Returns `false` if the ticket was superseded and
    /// the result was discarded.
    pub fn complete(&mut self, ticket: &FetchTicket<P::Position>, result: Result<FetchedPage<P::Meta>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale listing response seq={} latest={}", ticket.seq, self.latest_seq);
            return false;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.paging.settle(ticket.position.clone(), page.meta);
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                log::warn!("listing fetch failed: {e}");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading | LoadStatus::Idle)
    }

    #[must_use]
    pub fn view(&self) -> ListingView {
        match &self.status {
            LoadStatus::Idle | LoadStatus::Loading => ListingView::Loading,
            LoadStatus::Failed(message) => ListingView::Error(message.clone()),
            LoadStatus::Ready if self.items.is_empty() => ListingView::Empty,
            LoadStatus::Ready => ListingView::Items,
        }
    }
}

/// Admin article table: page numbers, fixed page size.
pub type ArticleTableState = ListingState<PageNumberPaging>;

/// Public news feed: next-page cursors.
pub type FeedState = ListingState<CursorPaging>;
