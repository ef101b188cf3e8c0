//! Author resource service.

#[cfg(test)]
#[path = "authors_test.rs"]
mod authors_test;

use crate::config::{api_url, endpoints};
use crate::net::http::{self, ApiError};
use crate::net::types::Author;

fn item_url(id: i64) -> String {
    api_url(endpoints::AUTHORS, &format!("/{id}"))
}

/// Fetch an author with their articles.
///
/// # Errors
///
/// [`ApiError`] on any failed request.
pub async fn get(id: i64) -> Result<Author, ApiError> {
    http::from_body(http::get(&item_url(id)).await?)
}
