//! JWT token creation with HMAC-SHA256 signing.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use notevault_core::config::AuthConfig;

use crate::error::AuthError;

use super::claims::Claims;
use super::ttl::parse_ttl;

/// Creates signed JWTs.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// False when the process secret is empty.
    has_secret: bool,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("has_secret", &self.has_secret)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Creates a new encoder from a raw secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            has_secret: !secret.is_empty(),
        }
    }

    /// Signs a token for `username` with the given permission and lifetime.
    pub fn generate_token(
        &self,
        username: &str,
        permission: &str,
        ttl: &str,
    ) -> Result<String, AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::InvalidTokenRequest(
                "username must not be empty".to_string(),
            ));
        }
        if permission.trim().is_empty() {
            return Err(AuthError::InvalidTokenRequest(
                "permission must not be empty".to_string(),
            ));
        }

        let lifetime = parse_ttl(ttl)?;
        let now = Utc::now().timestamp();
        let exp = now.checked_add(lifetime.num_seconds()).ok_or_else(|| {
            AuthError::InvalidTokenRequest(format!("token lifetime {ttl:?} overflows"))
        })?;

        self.encode_claims(&Claims::new(username, permission, now, exp))
    }

    /// Signs an already-built claims payload.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        if !self.has_secret {
            return Err(AuthError::SigningFailure(
                "signing secret is not configured".to_string(),
            ));
        }

        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_three_segments() {
        let encoder = JwtEncoder::from_secret(b"test-secret");
        let token = encoder.generate_token("alice", "user", "1h").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_same_second_tokens_differ() {
        let encoder = JwtEncoder::from_secret(b"test-secret");
        let first = encoder.generate_token("alice", "user", "1h").unwrap();
        let second = encoder.generate_token("alice", "user", "1h").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejects_empty_inputs() {
        let encoder = JwtEncoder::from_secret(b"test-secret");
        assert!(matches!(
            encoder.generate_token("", "user", "1h"),
            Err(AuthError::InvalidTokenRequest(_))
        ));
        assert!(matches!(
            encoder.generate_token("alice", " ", "1h"),
            Err(AuthError::InvalidTokenRequest(_))
        ));
        assert!(matches!(
            encoder.generate_token("alice", "user", "soon"),
            Err(AuthError::InvalidTokenRequest(_))
        ));
    }

    #[test]
    fn test_empty_secret_is_signing_failure() {
        let encoder = JwtEncoder::from_secret(b"");
        assert!(matches!(
            encoder.generate_token("alice", "user", "1h"),
            Err(AuthError::SigningFailure(_))
        ));
    }
}
