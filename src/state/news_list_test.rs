use super::*;
use crate::net::query::SortDirection;

fn sample_page() -> Page<News> {
    Page {
        content: vec![News {
            id: 1,
            title: "Launch day".to_owned(),
            content: "We shipped.".to_owned(),
            create_date: None,
            last_update_date: None,
            author: None,
            tags: Vec::new(),
        }],
        total_elements: 41,
        total_pages: 5,
    }
}

#[test]
fn default_state_is_idle_and_empty() {
    let s = NewsListState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.search_loading);
    assert!(!s.not_found);
    assert!(s.error.is_none());
}

#[test]
fn default_view_fetch_uses_full_page_spinner() {
    let mut s = NewsListState::default();
    s.begin_fetch(&ListQuery::default());
    assert!(s.loading);
    assert!(!s.search_loading);
}

#[test]
fn refined_view_fetch_uses_inline_spinner() {
    let mut s = NewsListState::default();
    let query = ListQuery {
        search: "rust".to_owned(),
        direction: SortDirection::Asc,
        ..ListQuery::default()
    };
    s.begin_fetch(&query);
    assert!(!s.loading);
    assert!(s.search_loading);
}

#[test]
fn apply_page_replaces_items_and_settles() {
    let mut s = NewsListState::default();
    s.begin_fetch(&ListQuery::default());
    s.apply_page(sample_page());
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.total_elements, 41);
    assert_eq!(s.total_pages, 5);
    assert!(!s.loading);
    assert!(!s.search_loading);
}

#[test]
fn apply_page_clears_a_previous_not_found() {
    let mut s = NewsListState { not_found: true, ..NewsListState::default() };
    s.apply_page(sample_page());
    assert!(!s.not_found);
}

#[test]
fn not_found_error_sets_the_not_found_view() {
    let mut s = NewsListState::default();
    s.begin_fetch(&ListQuery::default());
    s.apply_error(&ApiError::from_response(404, ""));
    assert!(s.not_found);
    assert!(s.error.is_none());
    assert!(!s.loading);
}

#[test]
fn other_errors_surface_the_translated_message() {
    let mut s = NewsListState::default();
    s.begin_fetch(&ListQuery::default());
    s.apply_error(&ApiError::from_response(400, r#"{"errorCode":"000005","errorMessage":"raw"}"#));
    assert_eq!(s.error.as_deref(), Some("Validation error"));
    assert!(!s.not_found);
}

#[test]
fn begin_fetch_clears_previous_error() {
    let mut s = NewsListState { error: Some("old".to_owned()), ..NewsListState::default() };
    s.begin_fetch(&ListQuery::default());
    assert!(s.error.is_none());
}
