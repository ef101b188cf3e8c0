use leptos::prelude::*;
use serde_json::json;

use super::*;

fn token_with_authorities(authorities: &[&str]) -> String {
    let payload = crate::util::jwt::encode_payload(&json!({
        "sub": "alice",
        "authorities": authorities,
        "exp": 1_999_999_999u64,
    }));
    format!("header.{payload}.signature")
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let s = SessionState::default();
    assert!(s.token.is_none());
    assert!(!s.is_authenticated);
    assert!(s.roles.is_empty());
    assert!(!s.loading);
    assert!(s.last_error.is_none());
}

#[test]
fn restore_from_valid_token_derives_roles() {
    let token = token_with_authorities(&["ADMIN", "USER"]);
    let s = SessionState::from_persisted_token(Some(token.clone()));
    assert!(s.is_authenticated);
    assert_eq!(s.token.as_deref(), Some(token.as_str()));
    assert!(s.has_role("ADMIN"));
    assert!(s.has_role("USER"));
}

#[test]
fn restore_from_undecodable_token_discards_it() {
    let s = SessionState::from_persisted_token(Some("garbage".to_owned()));
    assert_eq!(s, SessionState::default());
}

#[test]
fn restore_without_token_is_default() {
    assert_eq!(SessionState::from_persisted_token(None), SessionState::default());
}

// =============================================================
// Transition lifecycle
// =============================================================

#[test]
fn begin_transition_sets_loading_and_clears_error() {
    let mut s = SessionState { last_error: Some("old".to_owned()), ..SessionState::default() };
    assert!(s.begin_transition());
    assert!(s.loading);
    assert!(s.last_error.is_none());
}

#[test]
fn begin_transition_refuses_while_in_flight() {
    let mut s = SessionState::default();
    assert!(s.begin_transition());
    assert!(!s.begin_transition());
    assert!(s.loading);
}

#[test]
fn apply_token_authenticates_and_settles() {
    let mut s = SessionState::default();
    s.begin_transition();
    s.apply_token(&token_with_authorities(&["ADMIN"])).unwrap();
    assert!(s.is_authenticated);
    assert!(s.is_admin());
    assert!(!s.loading);
    assert!(s.last_error.is_none());
}

#[test]
fn apply_token_rejects_malformed_token_without_mutating() {
    let mut s = SessionState::default();
    s.begin_transition();
    let err = s.apply_token("no-dots-here").unwrap_err();
    assert_eq!(err, crate::util::jwt::JwtError::InvalidFormat);
    assert!(!s.is_authenticated);
    assert!(s.token.is_none());
    // Still in flight until the caller settles with `fail`.
    assert!(s.loading);
}

#[test]
fn fail_settles_with_message_and_keeps_auth_fields() {
    let token = token_with_authorities(&["USER"]);
    let mut s = SessionState::from_persisted_token(Some(token));
    s.begin_transition();
    s.fail("Login failed.");
    assert!(!s.loading);
    assert_eq!(s.last_error.as_deref(), Some("Login failed."));
    // A failed re-auth does not revoke the existing session.
    assert!(s.is_authenticated);
}

#[test]
fn clear_drops_everything() {
    let mut s = SessionState::from_persisted_token(Some(token_with_authorities(&["ADMIN"])));
    s.clear();
    assert!(!s.is_authenticated);
    assert!(s.roles.is_empty());
    assert!(s.token.is_none());
    assert!(s.last_error.is_none());
}

// =============================================================
// Roles
// =============================================================

#[test]
fn admin_requires_the_admin_role() {
    let admin = SessionState::from_persisted_token(Some(token_with_authorities(&["ADMIN"])));
    let user = SessionState::from_persisted_token(Some(token_with_authorities(&["USER"])));
    assert!(admin.is_admin());
    assert!(!user.is_admin());
}

#[test]
fn token_without_authorities_claim_yields_no_roles() {
    let payload = crate::util::jwt::encode_payload(&json!({ "sub": "bob" }));
    let s = SessionState::from_persisted_token(Some(format!("h.{payload}")));
    assert!(s.is_authenticated);
    assert!(s.roles.is_empty());
    assert!(!s.is_admin());
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn login_failure_translates_known_codes() {
    let err = ApiError::from_response(401, r#"{"errorCode":"000011","errorMessage":"raw"}"#);
    assert_eq!(login_failure_message(&err), "Authentication failed");
}

#[test]
fn login_failure_plain_401_names_credentials() {
    let err = ApiError::from_response(401, "");
    assert_eq!(login_failure_message(&err), "Invalid username or password");
}

#[test]
fn login_failure_5xx_is_server_error() {
    let err = ApiError::from_response(503, "");
    assert_eq!(login_failure_message(&err), "Server error. Please try again later.");
}

#[test]
fn login_failure_network_is_connection_error() {
    let err = ApiError::network("fetch failed");
    assert_eq!(login_failure_message(&err), "Network error. Please check your connection.");
}

#[test]
fn login_failure_other_status_is_generic() {
    let err = ApiError::from_response(400, "");
    assert_eq!(login_failure_message(&err), "Login failed.");
}

#[test]
fn register_failure_messages_mirror_login_shape() {
    assert_eq!(
        register_failure_message(&ApiError::from_response(401, "")),
        "Invalid registration data"
    );
    assert_eq!(
        register_failure_message(&ApiError::from_response(500, "")),
        "Server error. Please try again later."
    );
    assert_eq!(register_failure_message(&ApiError::from_response(422, "")), "Registration failed.");
}

// =============================================================
// Signal-level transitions
// =============================================================

#[test]
fn logout_clears_signal_state() {
    let session = RwSignal::new(SessionState::from_persisted_token(Some(token_with_authorities(
        &["ADMIN"],
    ))));
    logout(session);
    let s = session.get_untracked();
    assert!(!s.is_authenticated);
    assert!(s.roles.is_empty());
    assert!(s.token.is_none());
}

#[test]
fn oauth2_login_with_valid_token_authenticates() {
    let session = RwSignal::new(SessionState::default());
    let ok = block_on(login_with_oauth2(session, &token_with_authorities(&["USER"])));
    assert!(ok);
    let s = session.get_untracked();
    assert!(s.is_authenticated);
    assert!(s.has_role("USER"));
    assert!(!s.loading);
}

#[test]
fn oauth2_login_with_malformed_token_sets_explicit_error() {
    let session = RwSignal::new(SessionState::default());
    let ok = block_on(login_with_oauth2(session, "not-a-jwt"));
    assert!(!ok);
    let s = session.get_untracked();
    assert!(!s.is_authenticated);
    assert_eq!(s.last_error.as_deref(), Some(INVALID_OAUTH2_TOKEN));
    assert!(!s.loading);
}

#[test]
fn oauth2_login_refuses_while_another_transition_is_in_flight() {
    let session = RwSignal::new(SessionState { loading: true, ..SessionState::default() });
    let ok = block_on(login_with_oauth2(session, &token_with_authorities(&["USER"])));
    assert!(!ok);
    assert!(!session.get_untracked().is_authenticated);
}

/// Minimal executor for futures that never actually suspend in native tests.
fn block_on<T>(fut: impl Future<Output = T>) -> T {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct Noop;
    impl Wake for Noop {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(Noop));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(value) = fut.as_mut().poll(&mut cx) {
            return value;
        }
    }
}
