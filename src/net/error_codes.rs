//! Backend error-code translation.
//!
//! The backend reports domain failures as six-digit `errorCode` strings in
//! its error body. The table here is fixed by the API contract; anything
//! unknown falls back to the backend's own message.

#[cfg(test)]
#[path = "error_codes_test.rs"]
mod error_codes_test;

pub const NEWS_DOES_NOT_EXIST: &str = "000001";
pub const AUTHOR_DOES_NOT_EXIST: &str = "000002";
pub const TAG_DOES_NOT_EXIST: &str = "000003";
pub const COMMENT_DOES_NOT_EXIST: &str = "000004";
pub const VALIDATION_EXCEPTION: &str = "000005";
pub const API_VERSION_NOT_SUPPORTED: &str = "000006";
pub const RESOURCE_NOT_FOUND: &str = "000007";
pub const USER_DOES_NOT_EXIST: &str = "000008";
pub const METHOD_ARGUMENT_TYPE_MISMATCH: &str = "000009";
pub const ENTITY_ALREADY_EXISTS: &str = "000010";
pub const AUTHENTICATION_FAILED: &str = "000011";

/// Message shown when neither the table nor the fallback has anything to say.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Fixed table value for a known code, `None` otherwise.
fn table_message(code: &str) -> Option<&'static str> {
    match code {
        NEWS_DOES_NOT_EXIST => Some("News not found"),
        AUTHOR_DOES_NOT_EXIST => Some("Author not found"),
        TAG_DOES_NOT_EXIST => Some("Tag not found"),
        COMMENT_DOES_NOT_EXIST => Some("Comment not found"),
        VALIDATION_EXCEPTION => Some("Validation error"),
        API_VERSION_NOT_SUPPORTED => Some("API version not supported"),
        RESOURCE_NOT_FOUND => Some("Resource not found"),
        USER_DOES_NOT_EXIST => Some("User not found"),
        METHOD_ARGUMENT_TYPE_MISMATCH => Some("Invalid ID format"),
        ENTITY_ALREADY_EXISTS => Some("This item already exists"),
        AUTHENTICATION_FAILED => Some("Authentication failed"),
        _ => None,
    }
}

/// Translate a backend error code into a user-facing message.
///
/// A known code always wins over the fallback. Unknown or absent codes
/// return the fallback, then [`GENERIC_ERROR_MESSAGE`].
pub fn translate(code: Option<&str>, fallback: Option<&str>) -> String {
    code.and_then(table_message)
        .or(fallback)
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_owned()
}
