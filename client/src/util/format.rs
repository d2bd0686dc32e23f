//! Display formatting for upstream timestamps and user labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown date";

/// Render a published timestamp as `January 2, 2025`.
///
/// Accepts RFC 3339 (top-news API) and `YYYY-MM-DD hh:mm:ss` (feed API).
/// Anything else is shown verbatim.
#[must_use]
pub fn published_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return UNKNOWN_DATE.to_owned();
    }
    let long_date = format_description!("[month repr:long] [day padding:none], [year]");
    let formatted = if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        at.format(long_date)
    } else if let Ok(at) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")) {
        at.format(long_date)
    } else {
        return raw.to_owned();
    };
    formatted.unwrap_or_else(|_| raw.to_owned())
}

/// Render a published timestamp with time of day, as in the admin table.
#[must_use]
pub fn published_datetime(raw: &str) -> String {
    let raw = raw.trim();
    let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return published_date(raw);
    };
    at.format(format_description!("[month repr:long] [day padding:none], [year] [hour]:[minute]:[second]"))
        .unwrap_or_else(|_| raw.to_owned())
}

/// Uppercased first character of a username, for the header avatar.
#[must_use]
pub fn avatar_initial(username: &str) -> String {
    username.trim().chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Words in `text`, split on any run of whitespace.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
