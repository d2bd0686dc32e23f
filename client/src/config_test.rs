use super::*;

#[test]
fn value_or_uses_default_when_unset() {
    assert_eq!(value_or(None, "us"), "us");
}

#[test]
fn value_or_treats_blank_as_unset() {
    assert_eq!(value_or(Some("   "), "us"), "us");
}

#[test]
fn value_or_trims_override() {
    assert_eq!(value_or(Some(" gb "), "us"), "gb");
}

#[test]
fn base_url_or_strips_trailing_slashes() {
    assert_eq!(base_url_or(Some("https://example.test/v1//"), DEFAULT_TOP_NEWS_BASE_URL), "https://example.test/v1");
    assert_eq!(base_url_or(None, "https://dummyjson.com/"), "https://dummyjson.com");
}

#[test]
fn default_config_uses_fixed_page_size() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.admin_page_size, ADMIN_PAGE_SIZE);
    assert!(!cfg.identity_base_url.ends_with('/'));
    assert!(!cfg.locale.is_empty());
    assert!(!cfg.feed_topic.is_empty());
}
