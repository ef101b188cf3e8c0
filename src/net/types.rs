//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON (including the
//! `authorDtoResponse` / `tagDtoResponseList` envelope names) via serde
//! renames so the structs stay idiomatic Rust. Resources are owned by the
//! backend; the client only sends the draft subsets.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A news article as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub create_date: Option<String>,
    pub last_update_date: Option<String>,
    #[serde(rename = "authorDtoResponse")]
    pub author: Option<AuthorRef>,
    #[serde(rename = "tagDtoResponseList", default)]
    pub tags: Vec<Tag>,
}

/// Author identity embedded in a news article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
}

/// A full author record with their articles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub create_date: Option<String>,
    pub last_update_date: Option<String>,
    #[serde(rename = "newsDtoResponseList", default)]
    pub news: Vec<News>,
}

/// A tag attached to news articles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A comment on a news article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub news_id: Option<i64>,
    pub create_date: Option<String>,
    pub last_update_date: Option<String>,
}

/// One page of a paginated list response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_elements: 0, total_pages: 0 }
    }
}

/// Token envelope returned by the authenticate and register endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Create/update payload for a news article.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i64>,
}

/// Create payload for a comment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub content: String,
    pub news_id: i64,
}

/// Error body the backend sends with any non-2xx response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    /// Some backend revisions use `message` instead of `errorMessage`.
    pub message: Option<String>,
    pub http_status: Option<u16>,
    pub timestamp: Option<String>,
}
