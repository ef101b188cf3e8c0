//! Auth endpoints: credential login and account registration.
//!
//! These calls happen before a token exists; the HTTP client simply has no
//! bearer header to attach yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::{api_url, endpoints};
use crate::net::http::{self, ApiError};
use crate::net::types::AuthResponse;

fn authenticate_url() -> String {
    api_url(endpoints::AUTH, "/authenticate")
}

fn register_url() -> String {
    api_url(endpoints::AUTH, "/register")
}

/// Exchange credentials for a token.
///
/// # Errors
///
/// [`ApiError`]; a rejected login is a 401 and carries code `000011` when
/// the backend identifies it.
pub async fn authenticate(username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = serde_json::json!({ "username": username, "password": password });
    http::from_body(http::post(&authenticate_url(), &body).await?)
}

/// Create an account and receive a token for it.
///
/// # Errors
///
/// [`ApiError`]; an already-taken username carries code `000010`.
pub async fn register(
    firstname: &str,
    lastname: &str,
    username: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let body = serde_json::json!({
        "firstname": firstname,
        "lastname": lastname,
        "username": username,
        "password": password,
    });
    http::from_body(http::post(&register_url(), &body).await?)
}
