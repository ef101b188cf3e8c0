use super::*;
use base64::Engine as _;
use serde_json::json;

fn token_with_payload(claims: &serde_json::Value) -> String {
    format!("header.{}", encode_payload(claims))
}

#[test]
fn decode_payload_extracts_authorities() {
    let token = token_with_payload(&json!({
        "sub": "alice",
        "authorities": ["ADMIN", "USER"],
        "exp": 1_999_999_999u64,
        "iat": 1_700_000_000u64,
    }));
    let claims = decode_payload(&token).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("alice"));
    assert_eq!(claims.authorities, vec!["ADMIN", "USER"]);
    assert_eq!(claims.exp, Some(1_999_999_999));
}

#[test]
fn decode_payload_defaults_missing_authorities_to_empty() {
    let token = token_with_payload(&json!({ "sub": "bob" }));
    let claims = decode_payload(&token).unwrap();
    assert!(claims.authorities.is_empty());
}

#[test]
fn single_segment_token_is_invalid_format() {
    assert_eq!(decode_payload("not-a-jwt"), Err(JwtError::InvalidFormat));
}

#[test]
fn empty_token_is_invalid_format() {
    assert_eq!(decode_payload(""), Err(JwtError::InvalidFormat));
}

#[test]
fn empty_payload_segment_is_invalid_format() {
    assert_eq!(decode_payload("header."), Err(JwtError::InvalidFormat));
}

#[test]
fn invalid_format_error_message_is_stable() {
    assert_eq!(JwtError::InvalidFormat.to_string(), "Invalid JWT format");
}

#[test]
fn garbage_payload_is_base64_error() {
    assert_eq!(decode_payload("header.!!!not-base64!!!"), Err(JwtError::Base64));
}

#[test]
fn non_json_payload_is_json_error() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode("plain text");
    assert_eq!(decode_payload(&format!("h.{payload}")), Err(JwtError::Json));
}

#[test]
fn unpadded_payload_decodes_too() {
    let padded = encode_payload(&json!({ "sub": "x" }));
    let unpadded = padded.trim_end_matches('=');
    let claims = decode_payload(&format!("h.{unpadded}")).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("x"));
}

#[test]
fn signature_segment_is_ignored() {
    let token = format!("{}.sig", token_with_payload(&json!({ "sub": "y" })));
    assert_eq!(decode_payload(&token).unwrap().sub.as_deref(), Some("y"));
}

#[test]
fn encode_then_decode_round_trips_claims() {
    let claims = json!({
        "sub": "carol",
        "authorities": ["USER"],
        "exp": 2_000_000_000u64,
        "custom": { "nested": true },
    });
    let token = token_with_payload(&claims);
    assert_eq!(decode_claims_value(&token).unwrap(), claims);
}
