use super::*;
use serde_json::json;

#[test]
fn news_parses_backend_envelope_names() {
    let body = json!({
        "id": 7,
        "title": "Launch day",
        "content": "We shipped.",
        "createDate": "2026-01-05T10:00:00",
        "lastUpdateDate": "2026-01-06T09:30:00",
        "authorDtoResponse": { "id": 3, "name": "Alice" },
        "tagDtoResponseList": [{ "id": 1, "name": "release" }],
    });
    let news: News = serde_json::from_value(body).unwrap();
    assert_eq!(news.id, 7);
    assert_eq!(news.author.as_ref().unwrap().name, "Alice");
    assert_eq!(news.tags[0].name, "release");
}

#[test]
fn news_tolerates_missing_author_and_tags() {
    let body = json!({ "id": 1, "title": "t", "content": "c" });
    let news: News = serde_json::from_value(body).unwrap();
    assert!(news.author.is_none());
    assert!(news.tags.is_empty());
    assert!(news.create_date.is_none());
}

#[test]
fn page_parses_totals() {
    let body = json!({
        "content": [{ "id": 1, "name": "world" }],
        "totalElements": 41,
        "totalPages": 5,
    });
    let page: Page<Tag> = serde_json::from_value(body).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_elements, 41);
    assert_eq!(page.total_pages, 5);
}

#[test]
fn empty_page_defaults_to_zero_totals() {
    let page: Page<News> = serde_json::from_value(json!({})).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);
    assert_eq!(page.total_pages, 0);
}

#[test]
fn author_collects_their_news() {
    let body = json!({
        "id": 3,
        "name": "Alice",
        "createDate": "2025-11-01T00:00:00",
        "newsDtoResponseList": [
            { "id": 7, "title": "Launch day", "content": "We shipped." }
        ],
    });
    let author: Author = serde_json::from_value(body).unwrap();
    assert_eq!(author.news.len(), 1);
    assert_eq!(author.news[0].title, "Launch day");
}

#[test]
fn news_draft_serializes_camel_case_tag_ids() {
    let draft = NewsDraft {
        title: "Launch day".to_owned(),
        content: "We shipped.".to_owned(),
        tag_ids: vec![1, 2],
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({ "title": "Launch day", "content": "We shipped.", "tagIds": [1, 2] })
    );
}

#[test]
fn comment_draft_serializes_news_id() {
    let draft = CommentDraft { content: "nice".to_owned(), news_id: 7 };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({ "content": "nice", "newsId": 7 })
    );
}

#[test]
fn error_body_accepts_both_message_fields() {
    let body: ErrorBody = serde_json::from_value(json!({
        "errorCode": "000001",
        "errorMessage": "News with id 42 does not exist.",
        "httpStatus": 404,
        "timestamp": "2026-01-05T10:00:00",
    }))
    .unwrap();
    assert_eq!(body.error_code.as_deref(), Some("000001"));
    assert_eq!(body.http_status, Some(404));

    let alt: ErrorBody = serde_json::from_value(json!({ "message": "boom" })).unwrap();
    assert_eq!(alt.message.as_deref(), Some("boom"));
}
