use super::*;

#[test]
fn known_code_ignores_fallback() {
    assert_eq!(
        translate(Some(NEWS_DOES_NOT_EXIST), Some("backend says otherwise")),
        "News not found"
    );
}

#[test]
fn every_table_entry_translates() {
    let expected = [
        (NEWS_DOES_NOT_EXIST, "News not found"),
        (AUTHOR_DOES_NOT_EXIST, "Author not found"),
        (TAG_DOES_NOT_EXIST, "Tag not found"),
        (COMMENT_DOES_NOT_EXIST, "Comment not found"),
        (VALIDATION_EXCEPTION, "Validation error"),
        (API_VERSION_NOT_SUPPORTED, "API version not supported"),
        (RESOURCE_NOT_FOUND, "Resource not found"),
        (USER_DOES_NOT_EXIST, "User not found"),
        (METHOD_ARGUMENT_TYPE_MISMATCH, "Invalid ID format"),
        (ENTITY_ALREADY_EXISTS, "This item already exists"),
        (AUTHENTICATION_FAILED, "Authentication failed"),
    ];
    for (code, message) in expected {
        assert_eq!(translate(Some(code), None), message);
    }
}

#[test]
fn unknown_code_returns_fallback() {
    assert_eq!(
        translate(Some("999999"), Some("raw backend message")),
        "raw backend message"
    );
}

#[test]
fn absent_code_returns_fallback() {
    assert_eq!(translate(None, Some("something broke")), "something broke");
}

#[test]
fn absent_code_and_fallback_returns_generic_message() {
    assert_eq!(translate(None, None), "An error occurred");
}

#[test]
fn unknown_code_without_fallback_returns_generic_message() {
    assert_eq!(translate(Some("123456"), None), "An error occurred");
}
