use super::*;

#[test]
fn authorize_url_targets_the_google_flow() {
    assert!(authorize_url().ends_with("/oauth2/authorization/google"));
}

#[test]
fn redirect_is_a_noop_but_callable_natively() {
    redirect_to_provider();
}
