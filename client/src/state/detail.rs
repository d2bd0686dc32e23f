//! Article detail loader state.
//!
//! A detail visit is two fetches: the article itself, then the "other recent"
//! list. Both results carry the ticket of the visit that issued them, so
//! following a related link before the previous article finished loading
//! never shows the old article under the new URL.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::error::ApiError;
use crate::net::types::{Article, ArticleDetail};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailStatus {
    #[default]
    Loading,
    Failed(String),
    Ready(ArticleDetail),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub id: String,
}

#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub status: DetailStatus,
    pub related: Vec<Article>,
    latest_seq: u64,
}

impl DetailState {
    /// Start loading `id`, resetting any previous article.
    pub fn begin(&mut self, id: &str) -> DetailTicket {
        self.latest_seq += 1;
        self.status = DetailStatus::Loading;
        self.related.clear();
        DetailTicket { seq: self.latest_seq, id: id.to_owned() }
    }

    #[must_use]
    pub fn is_current(&self, ticket: &DetailTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Apply the detail fetch. Returns `true` when the related fetch should
    /// follow.
    pub fn complete_detail(&mut self, ticket: &DetailTicket, result: Result<ArticleDetail, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale detail for {}", ticket.id);
            return false;
        }
        match result {
            Ok(detail) => {
                self.status = DetailStatus::Ready(detail);
                true
            }
            Err(e) => {
                log::warn!("article {} failed to load: {e}", ticket.id);
                self.status = DetailStatus::Failed(e.to_string());
                false
            }
        }
    }

    /// Apply the related fetch. Failure leaves the section empty.
    pub fn complete_related(&mut self, ticket: &DetailTicket, result: Result<Vec<Article>, ApiError>) {
        if !self.is_current(ticket) {
            return;
        }
        match result {
            Ok(items) => self.related = items,
            Err(e) => {
                log::warn!("related articles for {} unavailable: {e}", ticket.id);
                self.related.clear();
            }
        }
    }
}
