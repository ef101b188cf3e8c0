//! Comment resource service.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use crate::config::{api_url, endpoints};
use crate::net::http::{self, ApiError};
use crate::net::types::{Comment, CommentDraft};

fn collection_url() -> String {
    api_url(endpoints::COMMENTS, "")
}

/// Post a new comment on an article.
///
/// # Errors
///
/// [`ApiError`]; backend validation failures carry code `000005`.
pub async fn create(content: &str, news_id: i64) -> Result<Comment, ApiError> {
    let draft = CommentDraft { content: content.to_owned(), news_id };
    let body = serde_json::to_value(&draft).map_err(|e| ApiError::decode(e.to_string()))?;
    http::from_body(http::post(&collection_url(), &body).await?)
}
