//! REST helpers for the two news providers.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since listings and details are
//! fetched after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages render the error text
//! inline and never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use super::error::ApiError;
use super::types::{Article, ArticleDetail, FetchedPage};
use crate::config::{ApiConfig, RELATED_FETCH_LIMIT};

/// Most related articles shown under a detail page.
pub const RELATED_ARTICLE_COUNT: usize = 3;

#[cfg(any(test, feature = "hydrate"))]
type QueryParams = Vec<(&'static str, String)>;

#[cfg(any(test, feature = "hydrate"))]
fn top_news_endpoint(config: &ApiConfig) -> String {
    format!("{}/news/top", config.top_news_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn article_detail_endpoint(config: &ApiConfig, id: &str) -> String {
    format!("{}/news/uuid/{id}", config.top_news_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn feed_endpoint(config: &ApiConfig) -> String {
    format!("{}/latest", config.feed_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn top_news_params(config: &ApiConfig, page: u32, limit: u32, query: &str) -> QueryParams {
    let mut params = vec![
        ("api_token", config.top_news_token.to_owned()),
        ("locale", config.locale.to_owned()),
        ("limit", limit.to_string()),
        ("page", page.to_string()),
    ];
    let query = query.trim();
    if !query.is_empty() {
        params.push(("search", query.to_owned()));
    }
    params
}

#[cfg(any(test, feature = "hydrate"))]
fn feed_params(config: &ApiConfig, cursor: Option<&str>, query: &str) -> QueryParams {
    let query = query.trim();
    let topic = if query.is_empty() { config.feed_topic } else { query };
    let mut params = vec![("apikey", config.feed_api_key.to_owned()), ("q", topic.to_owned())];
    if let Some(cursor) = cursor {
        params.push(("page", cursor.to_owned()));
    }
    params
}

/// Keep the first [`RELATED_ARTICLE_COUNT`] items that are not `current_id`.
#[must_use]
pub fn select_related(items: Vec<Article>, current_id: &str) -> Vec<Article> {
    items.into_iter().filter(|a| a.id != current_id).take(RELATED_ARTICLE_COUNT).collect()
}

#[cfg(feature = "hydrate")]
async fn get_body(url: &str, params: QueryParams) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    super::error::classify_response(status, body)
}

/// Fetch one page of the admin article table from `/news/top`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or schema failure.
pub async fn fetch_top_news(config: &ApiConfig, page: u32, query: &str) -> Result<FetchedPage<u64>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = top_news_params(config, page, config.admin_page_size, query);
        let body = get_body(&top_news_endpoint(config), params).await?;
        super::types::decode_top_news(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, page, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the public feed from `/latest`.
///
/// `cursor` is the `nextPage` token of the previous response, or `None` for
/// the first page.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or schema failure.
pub async fn fetch_feed(
    config: &ApiConfig,
    cursor: Option<&str>,
    query: &str,
) -> Result<FetchedPage<Option<String>>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_body(&feed_endpoint(config), feed_params(config, cursor, query)).await?;
        super::types::decode_feed(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, cursor, query);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single article by id.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when the id is unknown upstream.
pub async fn fetch_article_detail(config: &ApiConfig, id: &str) -> Result<ArticleDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = vec![("api_token", config.top_news_token.to_owned())];
        let body = get_body(&article_detail_endpoint(config, id), params)
            .await
            .map_err(ApiError::for_article_lookup)?;
        super::types::decode_article_detail(&body, id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch "other recent" articles to show under `current_id`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or schema failure.
pub async fn fetch_related(config: &ApiConfig, current_id: &str) -> Result<Vec<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = top_news_params(config, 1, RELATED_FETCH_LIMIT, "");
        let body = get_body(&top_news_endpoint(config), params).await?;
        let page = super::types::decode_top_news(&body)?;
        Ok(select_related(page.items, current_id))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, current_id, RELATED_FETCH_LIMIT);
        Err(ApiError::Unavailable)
    }
}
