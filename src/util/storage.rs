//! Persisted auth token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One localStorage key holds the bearer token between page loads. Only the
//! session store and the HTTP client's 401 path write here; every other
//! reader goes through the session store so there is one source of truth.
//! Requires a browser environment; native builds see no token.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// localStorage key the token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Read the persisted token, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(TOKEN_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
