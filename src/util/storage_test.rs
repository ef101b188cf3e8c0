#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn token_key_matches_persisted_contract() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn token_is_none_in_non_hydrate_tests() {
    assert!(token().is_none());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store_token("abc");
    clear_token();
    assert!(token().is_none());
}
