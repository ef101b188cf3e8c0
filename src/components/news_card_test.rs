use super::*;

#[test]
fn short_content_is_untouched() {
    assert_eq!(truncate("brief", 120), "brief");
}

#[test]
fn long_content_is_cut_with_ellipsis() {
    let text = "x".repeat(130);
    let cut = truncate(&text, 120);
    assert_eq!(cut.chars().count(), 123);
    assert!(cut.ends_with("..."));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(121);
    let cut = truncate(&text, 120);
    assert_eq!(cut.chars().count(), 123);
}

#[test]
fn exact_length_content_is_untouched() {
    let text = "y".repeat(120);
    assert_eq!(truncate(&text, 120), text);
}

#[test]
fn display_date_drops_the_time_part() {
    assert_eq!(display_date("2026-01-05T10:00:00"), "2026-01-05");
}

#[test]
fn display_date_passes_through_bare_dates() {
    assert_eq!(display_date("2026-01-05"), "2026-01-05");
}
