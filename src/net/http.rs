//! Authenticated HTTP client over the platform fetch primitive.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: stubs returning a network error, since the REST
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure — non-2xx status or network error — is normalized into one
//! [`ApiError`] shape before callers see it. A 401 additionally tears down
//! the session: the persisted token is cleared and the unauthorized hook
//! fires exactly once, synchronously, before the error is returned. The
//! hook is injected by the application shell so this layer stays free of
//! navigation concerns.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

use serde_json::Value;
use thiserror::Error;

use super::error_codes;
use super::types::ErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage;

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Normalized error for any failed API call.
///
/// `status` is the HTTP status of the response, or `0` when no response
/// arrived (network failure, unexpected body shape).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{error_message}")]
pub struct ApiError {
    pub status: u16,
    pub error_code: Option<String>,
    pub error_message: String,
    pub http_status: Option<u16>,
}

impl ApiError {
    /// Build from a non-2xx response's status and raw body text.
    ///
    /// The backend sends `{errorCode, errorMessage, httpStatus, timestamp}`;
    /// an unparseable body falls back to a synthetic message carrying the
    /// raw status.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                let message = parsed
                    .error_message
                    .or(parsed.message)
                    .unwrap_or_else(|| synthetic_message(status));
                Self {
                    status,
                    error_code: parsed.error_code,
                    error_message: message,
                    http_status: parsed.http_status,
                }
            }
            Err(_) => Self {
                status,
                error_code: None,
                error_message: synthetic_message(status),
                http_status: None,
            },
        }
    }

    /// A failure with no HTTP response (fetch rejected, connection lost).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            error_code: None,
            error_message: message.into(),
            http_status: None,
        }
    }

    /// A 2xx response whose body did not match the expected shape.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::network(message)
    }

    /// User-facing message: the fixed code table wins, then the backend's
    /// own message.
    pub fn user_message(&self) -> String {
        error_codes::translate(self.error_code.as_deref(), Some(&self.error_message))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
            || self.error_code.as_deref() == Some(error_codes::AUTHENTICATION_FAILED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
            || matches!(
                self.error_code.as_deref(),
                Some(
                    error_codes::NEWS_DOES_NOT_EXIST
                        | error_codes::AUTHOR_DOES_NOT_EXIST
                        | error_codes::RESOURCE_NOT_FOUND
                )
            )
    }

    pub fn is_validation(&self) -> bool {
        self.error_code.as_deref() == Some(error_codes::VALIDATION_EXCEPTION)
    }

    pub fn is_conflict(&self) -> bool {
        self.error_code.as_deref() == Some(error_codes::ENTITY_ALREADY_EXISTS)
    }
}

fn synthetic_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Interpret a successful response body.
///
/// Empty text is `None`; JSON parses to its value; anything else is kept as
/// a raw string.
#[cfg(any(test, feature = "hydrate"))]
fn success_from_text(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_owned())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Case-insensitive lookup for a caller-supplied header.
#[cfg(any(test, feature = "hydrate"))]
fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
}

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Install the handler fired when any request comes back 401.
///
/// The application shell wires this to its own navigation; the HTTP layer
/// itself only clears the persisted token.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    UNAUTHORIZED_HANDLER.with(|cell| {
        *cell.borrow_mut() = Some(Box::new(handler));
    });
}

/// Session teardown for a 401: drop the persisted token, then fire the
/// installed handler. Called once per 401, before the error is built.
#[cfg(any(test, feature = "hydrate"))]
fn handle_unauthorized() {
    storage::clear_token();
    UNAUTHORIZED_HANDLER.with(|cell| {
        if let Some(handler) = cell.borrow().as_ref() {
            handler();
        }
    });
}

/// Perform a request against the backend.
///
/// Attaches `Authorization: Bearer <token>` when a token is persisted and
/// the caller did not set that header, and `Content-Type: application/json`
/// when a body is present without one. Returns the parsed body: a JSON
/// value, the raw text as a string value, or `None` for an empty body.
///
/// # Errors
///
/// [`ApiError`] for any non-2xx response or network failure. A 401 also
/// clears the persisted token and fires the unauthorized hook first.
pub async fn request(
    method: HttpMethod,
    url: &str,
    body: Option<&Value>,
    headers: &[(String, String)],
) -> Result<Option<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder =
            gloo_net::http::RequestBuilder::new(url).method(to_gloo_method(method));

        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        if !has_header(headers, "Authorization") {
            if let Some(token) = storage::token() {
                builder = builder.header("Authorization", &bearer(&token));
            }
        }

        let built = if let Some(body) = body {
            if !has_header(headers, "Content-Type") {
                builder = builder.header("Content-Type", "application/json");
            }
            builder.body(body.to_string())
        } else {
            builder.build()
        };
        let request = built.map_err(|e| ApiError::network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !response.ok() {
            if status == 401 {
                handle_unauthorized();
            }
            return Err(ApiError::from_response(status, &text));
        }

        Ok(success_from_text(&text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body, headers);
        Err(ApiError::network("not available outside the browser"))
    }
}

#[cfg(feature = "hydrate")]
fn to_gloo_method(method: HttpMethod) -> gloo_net::http::Method {
    match method {
        HttpMethod::Get => gloo_net::http::Method::GET,
        HttpMethod::Post => gloo_net::http::Method::POST,
        HttpMethod::Patch => gloo_net::http::Method::PATCH,
        HttpMethod::Delete => gloo_net::http::Method::DELETE,
    }
}

/// GET a URL.
///
/// # Errors
///
/// See [`request`].
pub async fn get(url: &str) -> Result<Option<Value>, ApiError> {
    request(HttpMethod::Get, url, None, &[]).await
}

/// POST a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn post(url: &str, body: &Value) -> Result<Option<Value>, ApiError> {
    request(HttpMethod::Post, url, Some(body), &[]).await
}

/// PATCH a JSON body.
///
/// # Errors
///
/// See [`request`].
pub async fn patch(url: &str, body: &Value) -> Result<Option<Value>, ApiError> {
    request(HttpMethod::Patch, url, Some(body), &[]).await
}

/// DELETE a URL.
///
/// # Errors
///
/// See [`request`].
pub async fn delete(url: &str) -> Result<Option<Value>, ApiError> {
    request(HttpMethod::Delete, url, None, &[]).await
}

/// Deserialize a response body into the caller's type.
///
/// # Errors
///
/// [`ApiError::decode`] when the body is missing or does not match `T`.
pub fn from_body<T: serde::de::DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    let value = body.unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|e| ApiError::decode(format!("unexpected response shape: {e}")))
}
