//! OAuth2 entry point.
//!
//! The flow is a full-page round-trip: the browser navigates to the
//! backend's Google authorization endpoint, and the backend redirects back
//! to `/oauth2/callback?token=<jwt>` where the session store adopts the
//! token.

#[cfg(test)]
#[path = "oauth2_test.rs"]
mod oauth2_test;

use crate::config::backend_url;

/// Backend endpoint that starts the Google OAuth2 flow.
pub fn authorize_url() -> String {
    format!("{}/oauth2/authorization/google", backend_url())
}

/// Hard-navigate the browser to the provider. Requires a browser
/// environment; a no-op elsewhere.
pub fn redirect_to_provider() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&authorize_url());
        }
    }
}
