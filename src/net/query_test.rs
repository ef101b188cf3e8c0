use super::*;

#[test]
fn default_news_view_builds_expected_query() {
    let query = ListQuery::default();
    assert_eq!(query.to_query_string(), "page=0&size=10&sort=createDate,DESC");
}

#[test]
fn empty_search_is_omitted() {
    let query = ListQuery { search: String::new(), ..ListQuery::default() };
    assert!(!query.to_query_string().contains("search"));
}

#[test]
fn whitespace_only_search_is_omitted() {
    let query = ListQuery { search: "   ".to_owned(), ..ListQuery::default() };
    assert!(!query.to_query_string().contains("search"));
}

#[test]
fn non_empty_search_is_included() {
    let query = ListQuery { search: "rust".to_owned(), ..ListQuery::default() };
    assert_eq!(
        query.to_query_string(),
        "page=0&size=10&sort=createDate,DESC&search=rust"
    );
}

#[test]
fn search_value_is_percent_encoded() {
    let query = ListQuery { search: "hello world & more".to_owned(), ..ListQuery::default() };
    assert!(query.to_query_string().ends_with("&search=hello%20world%20%26%20more"));
}

#[test]
fn multibyte_search_is_encoded_bytewise() {
    let query = ListQuery { search: "é".to_owned(), ..ListQuery::default() };
    assert!(query.to_query_string().ends_with("&search=%C3%A9"));
}

#[test]
fn sort_direction_renders_uppercase() {
    assert_eq!(SortDirection::Asc.as_str(), "ASC");
    assert_eq!(SortDirection::Desc.as_str(), "DESC");
}

#[test]
fn sort_direction_toggles() {
    assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
}

#[test]
fn custom_page_and_sort_render() {
    let query = ListQuery {
        page: 3,
        size: 20,
        sort_field: "title".to_owned(),
        direction: SortDirection::Asc,
        search: String::new(),
    };
    assert_eq!(query.to_query_string(), "page=3&size=20&sort=title,ASC");
}

#[test]
fn default_view_detection() {
    assert!(ListQuery::default().is_default_view());
    assert!(!ListQuery { page: 1, ..ListQuery::default() }.is_default_view());
    assert!(!ListQuery { search: "x".to_owned(), ..ListQuery::default() }.is_default_view());
}
