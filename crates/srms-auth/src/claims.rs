//! Unverified inspection of session token claims.
//!
//! The SRMS backend issues HS256 JWTs of the form `{sub, role, exp}`. The
//! client reads them to learn the signed-in role when the login response does
//! not state it, and to show session details. Signatures are not checked:
//! the decoded claims are informational only and every request is still
//! authorized by the server.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use srms_core::serde::deserialize_optional_string_or_number;
use srms_models::Role;

/// Claims carried by an SRMS access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID (subject claim). Issued as an integer by the backend.
    #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_unix)
    }
}

/// Decodes the claims of `token` without verifying its signature or expiry.
///
/// Returns `None` for opaque (non-JWT) tokens or malformed payloads.
pub fn peek_claims(token: &str) -> Option<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn issue(claims: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_peek_reads_backend_claims() {
        let token = issue(json!({ "sub": 7, "role": "teacher", "exp": 1_700_000_000 }));
        let claims = peek_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("7"));
        assert_eq!(claims.role, Some(Role::Teacher));
        assert_eq!(claims.exp, Some(1_700_000_000));
    }

    #[test]
    fn test_peek_ignores_expiry() {
        let token = issue(json!({ "sub": "1", "role": "admin", "exp": 1 }));
        let claims = peek_claims(&token).unwrap();
        assert!(claims.is_expired_at(2));
        assert_eq!(claims.role, Some(Role::Admin));
    }

    #[test]
    fn test_peek_without_role() {
        let token = issue(json!({ "sub": 3 }));
        let claims = peek_claims(&token).unwrap();
        assert!(claims.role.is_none());
        assert!(!claims.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_peek_opaque_token_is_none() {
        assert!(peek_claims("abc").is_none());
        assert!(peek_claims("invalid.token.here").is_none());
    }
}
