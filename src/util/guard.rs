//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::routes;
use crate::state::session::SessionState;

/// Whether the session warrants a redirect to the login page.
///
/// Never redirects mid-transition so a pending login is not interrupted.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated
}

/// Redirect to the login route whenever the session loses authentication.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    });
}
