//! Upstream API configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app talks directly to three third-party endpoints from the browser.
//! Their base URLs and credentials are read from `NEWSDESK_*` variables at
//! compile time so the WASM bundle needs no runtime config fetch. Missing
//! variables fall back to the public defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TOP_NEWS_BASE_URL: &str = "https://api.thenewsapi.com/v1";
pub const DEFAULT_FEED_BASE_URL: &str = "https://newsdata.io/api/1";
pub const DEFAULT_LOCALE: &str = "us";
pub const DEFAULT_FEED_TOPIC: &str = "tech";

/// Rows per page in the admin article table.
pub const ADMIN_PAGE_SIZE: u32 = 10;

/// Items requested for the "other articles" strip; one may be the current article.
pub const RELATED_FETCH_LIMIT: u32 = 4;

/// Typed view of the upstream endpoints and credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub identity_base_url: &'static str,
    pub top_news_base_url: &'static str,
    pub top_news_token: &'static str,
    pub feed_base_url: &'static str,
    pub feed_api_key: &'static str,
    pub locale: &'static str,
    pub feed_topic: &'static str,
    pub admin_page_size: u32,
}

impl ApiConfig {
    /// Build config from `NEWSDESK_*` compile-time variables.
    ///
    /// Optional:
    /// - `NEWSDESK_IDENTITY_BASE_URL`
    /// - `NEWSDESK_TOP_NEWS_BASE_URL`, `NEWSDESK_TOP_NEWS_TOKEN`
    /// - `NEWSDESK_FEED_BASE_URL`, `NEWSDESK_FEED_API_KEY`, `NEWSDESK_FEED_TOPIC`
    /// - `NEWSDESK_LOCALE`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            identity_base_url: base_url_or(option_env!("NEWSDESK_IDENTITY_BASE_URL"), DEFAULT_IDENTITY_BASE_URL),
            top_news_base_url: base_url_or(option_env!("NEWSDESK_TOP_NEWS_BASE_URL"), DEFAULT_TOP_NEWS_BASE_URL),
            top_news_token: value_or(option_env!("NEWSDESK_TOP_NEWS_TOKEN"), ""),
            feed_base_url: base_url_or(option_env!("NEWSDESK_FEED_BASE_URL"), DEFAULT_FEED_BASE_URL),
            feed_api_key: value_or(option_env!("NEWSDESK_FEED_API_KEY"), ""),
            locale: value_or(option_env!("NEWSDESK_LOCALE"), DEFAULT_LOCALE),
            feed_topic: value_or(option_env!("NEWSDESK_FEED_TOPIC"), DEFAULT_FEED_TOPIC),
            admin_page_size: ADMIN_PAGE_SIZE,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn value_or(raw: Option<&'static str>, default: &'static str) -> &'static str {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

fn base_url_or(raw: Option<&'static str>, default: &'static str) -> &'static str {
    value_or(raw, default).trim_end_matches('/')
}
