//! News page list state.
//!
//! Tracks the current page of articles together with the two loading flavors
//! the news page distinguishes: the initial full-page spinner for the
//! untouched default view, and the lighter inline indicator while a search,
//! sort, or page change is in flight.

#[cfg(test)]
#[path = "news_list_test.rs"]
mod news_list_test;

use crate::net::http::ApiError;
use crate::net::query::ListQuery;
use crate::net::types::{News, Page};

/// State backing the news list page.
#[derive(Clone, Debug, Default)]
pub struct NewsListState {
    pub items: Vec<News>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub search_loading: bool,
    pub not_found: bool,
    pub error: Option<String>,
}

impl NewsListState {
    /// Mark a fetch as started; the query decides which spinner shows.
    pub fn begin_fetch(&mut self, query: &ListQuery) {
        self.error = None;
        if query.is_default_view() {
            self.loading = true;
        } else {
            self.search_loading = true;
        }
    }

    /// Apply a fetched page.
    pub fn apply_page(&mut self, page: Page<News>) {
        self.items = page.content;
        self.total_elements = page.total_elements;
        self.total_pages = page.total_pages;
        self.not_found = false;
        self.settle();
    }

    /// Apply a failed fetch: a missing-news response shows the not-found
    /// view, anything else the inline error.
    pub fn apply_error(&mut self, err: &ApiError) {
        if err.is_not_found() {
            self.not_found = true;
        } else {
            self.error = Some(err.user_message());
        }
        self.settle();
    }

    fn settle(&mut self) {
        self.loading = false;
        self.search_loading = false;
    }
}
