use super::*;

#[test]
fn collection_url_targets_the_comments_endpoint() {
    assert!(collection_url().ends_with("/api/v1/comments"));
}
