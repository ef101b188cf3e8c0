use super::*;

#[test]
fn should_redirect_when_idle_and_unauthenticated() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_a_transition_is_in_flight() {
    let state = SessionState { loading: true, ..SessionState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = SessionState {
        token: Some("t".to_owned()),
        is_authenticated: true,
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
}
