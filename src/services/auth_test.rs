use super::*;

#[test]
fn authenticate_url_targets_the_auth_endpoint() {
    assert!(authenticate_url().ends_with("/api/v1/auth/authenticate"));
}

#[test]
fn register_url_targets_the_auth_endpoint() {
    assert!(register_url().ends_with("/api/v1/auth/register"));
}
