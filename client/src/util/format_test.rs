use super::*;

#[test]
fn datetime_formats_backend_timestamps() {
    assert_eq!(datetime("2024-05-01T10:30:00"), "May 1, 2024 10:30");
    assert_eq!(datetime("2024-05-01T10:30:00.123456"), "May 1, 2024 10:30");
    assert_eq!(datetime("2024-12-24T08:05:00Z"), "Dec 24, 2024 08:05");
}

#[test]
fn datetime_passes_through_unparseable_input() {
    assert_eq!(datetime("tomorrow"), "tomorrow");
    assert_eq!(datetime_or_dash(None), "—");
}

#[test]
fn to_backend_adds_seconds_to_minute_precision_input() {
    assert_eq!(to_backend("2024-05-01T10:30").as_deref(), Some("2024-05-01T10:30:00"));
    assert_eq!(to_backend("2024-05-01T10:30:15").as_deref(), Some("2024-05-01T10:30:15"));
    assert_eq!(to_backend(""), None);
    assert_eq!(to_backend("2024-13-01T10:30"), None);
}

#[test]
fn to_input_drops_seconds() {
    assert_eq!(to_input("2024-05-01T10:30:45"), "2024-05-01T10:30");
    assert_eq!(to_input("garbage"), "");
}

#[test]
fn day_label_shortens_iso_dates() {
    assert_eq!(day_label("2024-05-01"), "May 1");
    assert_eq!(day_label("week 3"), "week 3");
}

#[test]
fn compact_abbreviates_large_counts() {
    assert_eq!(compact(999), "999");
    assert_eq!(compact(1_000), "1K");
    assert_eq!(compact(1_240), "1.2K");
    assert_eq!(compact(2_500_000), "2.5M");
}

#[test]
fn compact_rounds_before_choosing_the_band() {
    assert_eq!(compact(999_949), "999.9K");
    assert_eq!(compact(999_950), "1M");
    assert_eq!(compact(999_999), "1M");
    assert_eq!(compact(1_049_000), "1M");
    assert_eq!(compact(1_050_000), "1.1M");
    assert_eq!(compact(9_999), "10K");
}

#[test]
fn percent_uses_one_decimal() {
    assert_eq!(percent(3.456), "3.5%");
    assert_eq!(percent(0.0), "0.0%");
}

#[test]
fn excerpt_truncates_on_char_boundaries() {
    assert_eq!(excerpt("short", 10), "short");
    assert_eq!(excerpt("héllo wörld", 6), "héllo…");
}
