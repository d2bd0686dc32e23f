//! Upstream wire schemas and the domain types they validate into.
//!
//! DESIGN
//! ======
//! Each upstream payload is deserialized into a `*Wire` struct that accepts
//! missing or null fields, then validated into a domain type at the boundary.
//! Items missing an id or title are dropped rather than rendered half-empty.
//! Pages and state never see the wire structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// A news item as shown in listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Upstream identifier (`uuid` on the top-news API, `article_id` on the feed).
    pub id: String,
    pub title: String,
    pub image_url: Option<String>,
    /// Ordered category labels; may be empty.
    pub categories: Vec<String>,
    /// Raw upstream timestamp; format varies by provider.
    pub published_at: String,
    /// Link to the publisher's page.
    pub source_url: String,
    /// Short teaser, feed items only.
    pub description: Option<String>,
    /// Author names, feed items only.
    pub creator: Option<String>,
}

impl Article {
    /// First category label, or `N/A` when the upstream sent none.
    #[must_use]
    pub fn primary_category(&self) -> &str {
        self.categories.first().map_or("N/A", String::as_str)
    }
}

/// Full article payload for the detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub description: String,
    pub snippet: String,
    pub source_name: String,
}

/// One completed listing fetch: the items plus the pagination metadata
/// returned by the backing API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedPage<M> {
    pub items: Vec<Article>,
    pub meta: M,
}

// =============================================================================
// TOP NEWS (admin table + detail)
// =============================================================================

#[derive(Debug, Deserialize)]
struct TopNewsArticleWire {
    uuid: Option<String>,
    title: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    published_at: Option<String>,
    url: Option<String>,
    description: Option<String>,
    snippet: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TopNewsMetaWire {
    #[serde(default)]
    found: u64,
}

#[derive(Debug, Deserialize)]
struct TopNewsResponseWire {
    data: Vec<TopNewsArticleWire>,
    meta: Option<TopNewsMetaWire>,
}

impl TopNewsArticleWire {
    fn into_article(self) -> Option<Article> {
        let id = non_empty(self.uuid)?;
        let title = non_empty(self.title)?;
        Some(Article {
            id,
            title,
            image_url: non_empty(self.image_url),
            categories: self.categories.unwrap_or_default(),
            published_at: self.published_at.unwrap_or_default(),
            source_url: self.url.unwrap_or_default(),
            description: non_empty(self.description),
            creator: None,
        })
    }
}

/// Decode a `/news/top` body. `meta` is the total number of matches.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a top-news envelope.
pub fn decode_top_news(body: &str) -> Result<FetchedPage<u64>, ApiError> {
    let wire: TopNewsResponseWire = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let found = wire.meta.map_or(0, |m| m.found);
    let items = keep_valid(wire.data, TopNewsArticleWire::into_article);
    Ok(FetchedPage { items, meta: found })
}

/// Decode a `/news/uuid/{id}` body, checking it describes `requested_id`.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when the payload is for a different article or
/// lacks required fields, and `ApiError::Decode` when it is not JSON at all.
pub fn decode_article_detail(body: &str, requested_id: &str) -> Result<ArticleDetail, ApiError> {
    let wire: TopNewsArticleWire = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if wire.uuid.as_deref() != Some(requested_id) {
        return Err(ApiError::NotFound);
    }
    let description = wire.description.clone().unwrap_or_default();
    let snippet = wire.snippet.clone().unwrap_or_default();
    let source_name = wire.source.clone().unwrap_or_default();
    let article = wire.into_article().ok_or(ApiError::NotFound)?;
    Ok(ArticleDetail { article, description, snippet, source_name })
}

// =============================================================================
// LATEST FEED (public cursor-paginated feed)
// =============================================================================

/// The feed API sends `creator` as a string, a list, or null depending on source.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CreatorWire {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct FeedArticleWire {
    article_id: Option<String>,
    title: Option<String>,
    link: Option<String>,
    creator: Option<CreatorWire>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    image_url: Option<String>,
    description: Option<String>,
    category: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct FeedResponseWire {
    #[serde(default)]
    results: Vec<FeedArticleWire>,
    #[serde(rename = "nextPage")]
    next_page: Option<String>,
}

impl FeedArticleWire {
    fn into_article(self) -> Option<Article> {
        let id = non_empty(self.article_id)?;
        let title = non_empty(self.title)?;
        let creator = match self.creator {
            Some(CreatorWire::One(name)) => non_empty(Some(name)),
            Some(CreatorWire::Many(names)) if !names.is_empty() => Some(names.join(", ")),
            _ => None,
        };
        Some(Article {
            id,
            title,
            image_url: non_empty(self.image_url),
            categories: self.category.unwrap_or_default(),
            published_at: self.pub_date.unwrap_or_default(),
            source_url: self.link.unwrap_or_default(),
            description: non_empty(self.description),
            creator,
        })
    }
}

/// Decode a `/latest` body. `meta` is the cursor for the following page.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a feed envelope.
pub fn decode_feed(body: &str) -> Result<FetchedPage<Option<String>>, ApiError> {
    let wire: FeedResponseWire = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = keep_valid(wire.results, FeedArticleWire::into_article);
    Ok(FetchedPage { items, meta: non_empty(wire.next_page) })
}

fn keep_valid<W, F>(raw: Vec<W>, convert: F) -> Vec<Article>
where
    F: Fn(W) -> Option<Article>,
{
    let total = raw.len();
    let items: Vec<Article> = raw.into_iter().filter_map(convert).collect();
    if items.len() < total {
        log::debug!("dropped {} upstream items missing id or title", total - items.len());
    }
    items
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
