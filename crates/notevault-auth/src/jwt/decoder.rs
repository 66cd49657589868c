//! JWT signature verification and claim extraction.
//!
//! Verification here is a predicate: every decode failure is
//! folded into `false` / `None` and logged at debug level.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::{Map, Value};

use notevault_core::config::AuthConfig;

use super::claims::Claims;

/// Validates JWT signatures and reads claims.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature-only validation; expiry is checked by hand.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes())
    }

    /// Creates a new decoder from a raw secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` must be strictly in the future and may be absent for
        // username lookups, so the library's own checks are turned off.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies the signature and returns the raw claim map.
    fn decode_raw(&self, token: &str) -> Option<Map<String, Value>> {
        match decode::<Map<String, Value>>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Token signature verification failed");
                None
            }
        }
    }

    /// Returns `true` only if the signature verifies and `exp` is present,
    /// numeric, and strictly greater than the current time.
    pub fn verify_token(&self, token: &str) -> bool {
        let Some(claims) = self.decode_raw(token) else {
            return false;
        };

        match claims.get("exp").and_then(Value::as_f64) {
            Some(exp) => exp > Utc::now().timestamp() as f64,
            None => {
                tracing::debug!("Token has a missing or non-numeric exp claim");
                false
            }
        }
    }

    /// Returns the `username` claim of a verified token.
    ///
    /// `None` covers a bad signature, an expired token, and a missing or
    /// non-string claim alike. Tokens without `exp` are still accepted here.
    pub fn get_username(&self, token: &str) -> Option<String> {
        let claims = self.decode_raw(token)?;

        if let Some(exp) = claims.get("exp") {
            match exp.as_f64() {
                Some(exp) if exp > Utc::now().timestamp() as f64 => {}
                _ => {
                    tracing::debug!("Token expired or carries an invalid exp claim");
                    return None;
                }
            }
        }

        match claims.get("username") {
            Some(Value::String(username)) => Some(username.clone()),
            _ => {
                tracing::debug!("Token has a missing or non-string username claim");
                None
            }
        }
    }

    /// Returns the typed claims of a token that passes [`verify_token`](Self::verify_token).
    pub fn decode_claims(&self, token: &str) -> Option<Claims> {
        if !self.verify_token(token) {
            return None;
        }
        let claims = self.decode_raw(token)?;
        serde_json::from_value(Value::Object(claims)).ok()
    }

    /// Returns the `exp` of a correctly signed token, expired or not.
    pub fn expiry_of(&self, token: &str) -> Option<i64> {
        self.decode_raw(token)?.get("exp").and_then(Value::as_i64)
    }
}
