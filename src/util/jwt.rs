//! JWT payload decoding without signature verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never validates tokens; it only reads the payload segment to
//! derive roles and expiry. Verification is the backend's job. Decoding must
//! never panic: a malformed token becomes an explicit [`JwtError`].

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use serde::Deserialize;
use thiserror::Error;

/// Failure decoding a token's payload segment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JwtError {
    /// The token does not have the `header.payload[.signature]` shape.
    #[error("Invalid JWT format")]
    InvalidFormat,
    /// The payload segment is not valid base64url.
    #[error("invalid base64 in JWT payload")]
    Base64,
    /// The decoded payload is not valid JSON.
    #[error("invalid JSON in JWT payload")]
    Json,
}

/// Claims the backend embeds in its tokens.
///
/// `authorities` carries the role labels; the standard fields are kept for
/// expiry display and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    pub sub: Option<String>,
    #[serde(default)]
    pub authorities: Vec<String>,
    pub exp: Option<u64>,
    pub iat: Option<u64>,
}

/// Decode the payload segment of `token` into raw JSON claims.
///
/// Accepts both padded and unpadded base64url payloads.
///
/// # Errors
///
/// [`JwtError::InvalidFormat`] when the token has fewer than two
/// dot-delimited segments, [`JwtError::Base64`] / [`JwtError::Json`] when
/// the payload segment does not decode.
pub fn decode_claims_value(token: &str) -> Result<serde_json::Value, JwtError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(JwtError::InvalidFormat);
    };
    if payload.is_empty() {
        return Err(JwtError::InvalidFormat);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| JwtError::Base64)?;
    serde_json::from_slice(&bytes).map_err(|_| JwtError::Json)
}

/// Decode the payload segment of `token` into [`TokenClaims`].
///
/// # Errors
///
/// Same conditions as [`decode_claims_value`]; claims that deserialize to a
/// non-object also yield [`JwtError::Json`].
pub fn decode_payload(token: &str) -> Result<TokenClaims, JwtError> {
    let value = decode_claims_value(token)?;
    serde_json::from_value(value).map_err(|_| JwtError::Json)
}

/// Encode a claims object as a base64url-with-padding payload segment.
///
/// The inverse of [`decode_claims_value`] for a single segment; used to
/// build fixture tokens.
pub fn encode_payload(claims: &serde_json::Value) -> String {
    URL_SAFE.encode(claims.to_string())
}
