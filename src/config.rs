//! Application configuration constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module owns the backend base URL, endpoint suffixes, pagination and
//! debounce defaults, route paths, and field length limits so pages and
//! services never hard-code them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default backend origin when `NEWSDESK_BACKEND_URL` is not set at build time.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Backend origin all API URLs are built against.
pub fn backend_url() -> &'static str {
    option_env!("NEWSDESK_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// REST endpoint suffixes under the backend origin.
pub mod endpoints {
    pub const AUTH: &str = "/api/v1/auth";
    pub const NEWS: &str = "/api/v1/news";
    pub const TAGS: &str = "/api/v1/tags";
    pub const AUTHORS: &str = "/api/v1/authors";
    pub const COMMENTS: &str = "/api/v1/comments";
}

/// Build a full API URL from an endpoint suffix and a trailing path.
pub fn api_url(endpoint: &str, path: &str) -> String {
    format!("{}{endpoint}{path}", backend_url())
}

/// Client-side route paths.
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const NEWS: &str = "/news";
    pub const ABOUT: &str = "/about";
    pub const OAUTH_CALLBACK: &str = "/oauth2/callback";
}

/// Pagination defaults for list endpoints.
pub mod pagination {
    pub const DEFAULT_PAGE: u32 = 0;
    pub const DEFAULT_SIZE: u32 = 10;
    pub const MAX_SIZE: u32 = 50;
    /// Page sizes offered by the size selector.
    pub const SIZE_OPTIONS: [u32; 3] = [10, 20, 50];
}

/// Delay before a search input is applied, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DISMISS_MS: u32 = 5000;

/// Field length limits enforced by form validation.
pub mod limits {
    pub const USERNAME: (usize, usize) = (3, 30);
    pub const PASSWORD: (usize, usize) = (4, 30);
    pub const NAME: (usize, usize) = (3, 32);
    pub const COMMENT: (usize, usize) = (5, 255);
    pub const NEWS_TITLE: (usize, usize) = (6, 30);
    pub const NEWS_CONTENT: (usize, usize) = (12, 1000);
    pub const TAG: (usize, usize) = (3, 15);
}
