use super::*;

#[test]
fn byline_formats_date_and_author() {
    assert_eq!(byline("2025-02-03T08:15:00.000000Z"), "February 3, 2025 • Created by Admin");
}

#[test]
fn byline_keeps_unparseable_dates_verbatim() {
    assert_eq!(byline("yesterday"), "yesterday • Created by Admin");
}
