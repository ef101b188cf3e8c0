//! Tag resource service.
//!
//! Backs the tag autocomplete in the news form. A failed lookup degrades to
//! an empty suggestion list instead of surfacing an error; this is the one
//! deliberately swallowed failure path in the client.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use crate::config::{api_url, endpoints};
use crate::net::http::{self, ApiError};
use crate::net::query::percent_encode;
use crate::net::types::{Page, Tag};

/// Fixed page size for autocomplete suggestions.
const SUGGESTION_PAGE_SIZE: u32 = 20;

fn search_url(input: &str) -> String {
    format!(
        "{}?search={}&page=0&size={SUGGESTION_PAGE_SIZE}&sort=name,asc",
        api_url(endpoints::TAGS, ""),
        percent_encode(input)
    )
}

async fn fetch_page(input: &str) -> Result<Page<Tag>, ApiError> {
    http::from_body(http::get(&search_url(input)).await?)
}

/// Search tags by name prefix for the autocomplete.
///
/// Failures are logged and yield an empty list.
pub async fn search(input: &str) -> Vec<Tag> {
    match fetch_page(input).await {
        Ok(page) => page.content,
        Err(err) => {
            leptos::logging::warn!("tag search failed: {err}");
            Vec::new()
        }
    }
}
