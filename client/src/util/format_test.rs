use super::*;

#[test]
fn published_date_reads_rfc3339_with_fraction() {
    assert_eq!(published_date("2025-01-02T03:04:05.000000Z"), "January 2, 2025");
}

#[test]
fn published_date_reads_feed_format() {
    assert_eq!(published_date("2024-11-30 23:59:00"), "November 30, 2024");
}

#[test]
fn published_date_passes_unknown_formats_through() {
    assert_eq!(published_date("yesterday"), "yesterday");
    assert_eq!(published_date("  "), UNKNOWN_DATE);
}

#[test]
fn published_datetime_includes_time_of_day() {
    assert_eq!(published_datetime("2025-03-04T05:06:07Z"), "March 4, 2025 05:06:07");
    assert_eq!(published_datetime("2024-11-30 23:59:00"), "November 30, 2024");
}

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("emilys"), "E");
    assert_eq!(avatar_initial("   "), "?");
}

#[test]
fn word_count_ignores_extra_whitespace() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   \n\t "), 0);
    assert_eq!(word_count("  hello   rust\nworld\t!  "), 4);
}
