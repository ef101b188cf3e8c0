//! News resource service.
//!
//! Thin typed wrappers over the HTTP client for the `/api/v1/news`
//! endpoints. No caching; every call is a fresh request.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use crate::config::{api_url, endpoints};
use crate::net::http::{self, ApiError};
use crate::net::query::ListQuery;
use crate::net::types::{Author, Comment, News, NewsDraft, Page};

fn collection_url() -> String {
    api_url(endpoints::NEWS, "")
}

fn list_url(query: &ListQuery) -> String {
    format!("{}?{}", collection_url(), query.to_query_string())
}

fn item_url(id: i64) -> String {
    api_url(endpoints::NEWS, &format!("/{id}"))
}

fn comments_url(id: i64) -> String {
    api_url(endpoints::NEWS, &format!("/{id}/comments"))
}

fn author_url(id: i64) -> String {
    api_url(endpoints::NEWS, &format!("/{id}/author"))
}

/// Fetch one page of news matching `query`.
///
/// # Errors
///
/// [`ApiError`] on any failed request or unexpected body shape.
pub async fn list(query: &ListQuery) -> Result<Page<News>, ApiError> {
    http::from_body(http::get(&list_url(query)).await?)
}

/// Fetch a single article.
///
/// # Errors
///
/// [`ApiError`]; a missing article classifies as not-found.
pub async fn get(id: i64) -> Result<News, ApiError> {
    http::from_body(http::get(&item_url(id)).await?)
}

/// Create an article from a draft.
///
/// # Errors
///
/// [`ApiError`]; backend validation failures carry code `000005`.
pub async fn create(draft: &NewsDraft) -> Result<News, ApiError> {
    let body = serde_json::to_value(draft).map_err(|e| ApiError::decode(e.to_string()))?;
    http::from_body(http::post(&collection_url(), &body).await?)
}

/// Update an existing article.
///
/// # Errors
///
/// [`ApiError`] as for [`create`].
pub async fn update(id: i64, draft: &NewsDraft) -> Result<News, ApiError> {
    let body = serde_json::to_value(draft).map_err(|e| ApiError::decode(e.to_string()))?;
    http::from_body(http::patch(&item_url(id), &body).await?)
}

/// Delete an article.
///
/// # Errors
///
/// [`ApiError`] on any failed request.
pub async fn remove(id: i64) -> Result<(), ApiError> {
    http::delete(&item_url(id)).await?;
    Ok(())
}

/// Fetch the comments attached to an article, newest page only.
///
/// # Errors
///
/// [`ApiError`] on any failed request.
pub async fn comments(id: i64) -> Result<Vec<Comment>, ApiError> {
    let page: Page<Comment> = http::from_body(http::get(&comments_url(id)).await?)?;
    Ok(page.content)
}

/// Fetch the author of an article.
///
/// # Errors
///
/// [`ApiError`] on any failed request.
pub async fn author(id: i64) -> Result<Author, ApiError> {
    http::from_body(http::get(&author_url(id)).await?)
}
