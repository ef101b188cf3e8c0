//! Auth session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` provided via context is the single source of
//! truth for the token, derived roles, and the authenticated flag. All
//! mutation happens through the transitions in this module (login, register,
//! OAuth2 callback, logout) plus the HTTP client's 401 teardown; components
//! only read.
//!
//! INVARIANTS
//! ==========
//! `is_authenticated` is true only after a successful transition persisted a
//! token. `roles` always comes from the token's `authorities` claim. At most
//! one transition is in flight: `begin_transition` refuses re-entry while
//! `loading` is set.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::http::ApiError;
use crate::services::auth as auth_api;
use crate::util::jwt::{self, JwtError};
use crate::util::storage;

/// Role label that unlocks admin-only actions.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Message shown when an OAuth2 callback token does not decode.
pub const INVALID_OAUTH2_TOKEN: &str = "Invalid OAuth2 token";

/// Current auth session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub roles: Vec<String>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    /// Restore a session from the token persisted by a previous page load.
    ///
    /// A token that no longer decodes is discarded rather than trusted.
    pub fn from_persisted_token(token: Option<String>) -> Self {
        let Some(token) = token else {
            return Self::default();
        };
        match jwt::decode_payload(&token) {
            Ok(claims) => Self {
                token: Some(token),
                is_authenticated: true,
                roles: claims.authorities,
                loading: false,
                last_error: None,
            },
            Err(_) => Self::default(),
        }
    }

    /// Mark a transition as started. Returns `false` (and leaves the state
    /// untouched) when another transition is already in flight.
    pub fn begin_transition(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.last_error = None;
        true
    }

    /// Settle a transition successfully with a freshly obtained token.
    ///
    /// # Errors
    ///
    /// Returns the decode failure and leaves the state unchanged when the
    /// token's payload cannot be read.
    pub fn apply_token(&mut self, token: &str) -> Result<(), JwtError> {
        let claims = jwt::decode_payload(token)?;
        self.token = Some(token.to_owned());
        self.roles = claims.authorities;
        self.is_authenticated = true;
        self.loading = false;
        self.last_error = None;
        Ok(())
    }

    /// Settle a transition with a failure message; auth fields keep their
    /// previous values.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
    }

    /// Drop all auth state (logout, 401 teardown).
    pub fn clear(&mut self) {
        self.token = None;
        self.is_authenticated = false;
        self.roles.clear();
        self.loading = false;
        self.last_error = None;
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Session restored from storage at application start.
pub fn restore_session() -> SessionState {
    SessionState::from_persisted_token(storage::token())
}

/// Failure message for a login attempt.
fn login_failure_message(err: &ApiError) -> String {
    if err.status == 0 {
        "Network error. Please check your connection.".to_owned()
    } else if err.error_code.is_some() {
        err.user_message()
    } else if err.status == 401 {
        "Invalid username or password".to_owned()
    } else if err.status >= 500 {
        "Server error. Please try again later.".to_owned()
    } else {
        "Login failed.".to_owned()
    }
}

/// Failure message for a registration attempt.
fn register_failure_message(err: &ApiError) -> String {
    if err.status == 0 {
        "Network error. Please check your connection.".to_owned()
    } else if err.error_code.is_some() {
        err.user_message()
    } else if err.status == 401 {
        "Invalid registration data".to_owned()
    } else if err.status >= 500 {
        "Server error. Please try again later.".to_owned()
    } else {
        "Registration failed.".to_owned()
    }
}

/// Persist and apply a token obtained by a settled transition.
fn settle_with_token(session: RwSignal<SessionState>, token: &str) -> bool {
    let mut next = session.get_untracked();
    match next.apply_token(token) {
        Ok(()) => {
            storage::store_token(token);
            session.set(next);
            true
        }
        Err(err) => {
            session.update(|s| s.fail(err.to_string()));
            false
        }
    }
}

/// Authenticate with username and password.
///
/// Returns `true` when the session is now authenticated; on failure the
/// translated message lands in `last_error` and nothing is persisted.
pub async fn login(session: RwSignal<SessionState>, username: &str, password: &str) -> bool {
    if !try_begin(session) {
        return false;
    }
    match auth_api::authenticate(username, password).await {
        Ok(response) => settle_with_token(session, &response.token),
        Err(err) => {
            session.update(|s| s.fail(login_failure_message(&err)));
            false
        }
    }
}

/// Register a new account; same settle contract as [`login`].
pub async fn register(
    session: RwSignal<SessionState>,
    firstname: &str,
    lastname: &str,
    username: &str,
    password: &str,
) -> bool {
    if !try_begin(session) {
        return false;
    }
    match auth_api::register(firstname, lastname, username, password).await {
        Ok(response) => settle_with_token(session, &response.token),
        Err(err) => {
            session.update(|s| s.fail(register_failure_message(&err)));
            false
        }
    }
}

/// Adopt a token handed back by the OAuth2 redirect callback.
///
/// No network round-trip: the token is decoded locally. A token that does
/// not decode leaves the session unauthenticated with
/// [`INVALID_OAUTH2_TOKEN`] as the error.
pub async fn login_with_oauth2(session: RwSignal<SessionState>, token: &str) -> bool {
    if !try_begin(session) {
        return false;
    }
    let mut next = session.get_untracked();
    match next.apply_token(token) {
        Ok(()) => {
            storage::store_token(token);
            session.set(next);
            true
        }
        Err(_) => {
            session.update(|s| s.fail(INVALID_OAUTH2_TOKEN));
            false
        }
    }
}

/// Clear the session and the persisted token.
pub fn logout(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.update(SessionState::clear);
}

fn try_begin(session: RwSignal<SessionState>) -> bool {
    let mut begun = false;
    session.update(|s| begun = s.begin_transition());
    begun
}
