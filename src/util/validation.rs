//! Form field validation.
//!
//! Mirrors the backend's length constraints so forms can reject bad input
//! before a request is made. Each validator returns `None` when the value
//! passes, or the message to show inline.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::config::limits;

fn validate_length(value: &str, field: &str, (min, max): (usize, usize)) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field} cannot be blank"));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Some(format!("{field} must be between {min} and {max} characters"));
    }
    None
}

pub fn validate_username(value: &str) -> Option<String> {
    validate_length(value, "Username", limits::USERNAME)
}

pub fn validate_password(value: &str) -> Option<String> {
    validate_length(value, "Password", limits::PASSWORD)
}

pub fn validate_firstname(value: &str) -> Option<String> {
    validate_length(value, "Firstname", limits::NAME)
}

pub fn validate_lastname(value: &str) -> Option<String> {
    validate_length(value, "Lastname", limits::NAME)
}

pub fn validate_comment(value: &str) -> Option<String> {
    validate_length(value, "Comment", limits::COMMENT)
}

pub fn validate_news_title(value: &str) -> Option<String> {
    validate_length(value, "Title", limits::NEWS_TITLE)
}

pub fn validate_news_content(value: &str) -> Option<String> {
    validate_length(value, "Content", limits::NEWS_CONTENT)
}

/// Validate one tag name out of a selected set; the message names the tag.
pub fn validate_tag_name(name: &str) -> Option<String> {
    let (min, max) = limits::TAG;
    let len = name.chars().count();
    if len < min || len > max {
        return Some(format!("Tag \"{name}\" must be between {min} and {max} characters"));
    }
    None
}
