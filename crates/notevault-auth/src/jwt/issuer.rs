//! Token issuance, verification, and access-token renewal behind one handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notevault_core::config::AuthConfig;
use notevault_core::error::AppError;

use crate::error::AuthError;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use super::ttl::parse_ttl;

/// Permission stamped on every session token.
pub const DEFAULT_PERMISSION: &str = "user";

/// Lifetime of an access token minted from a refresh token.
pub const RENEWED_ACCESS_TTL: &str = "1h";

/// Access + refresh tokens issued at login.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_expires_at", &self.access_expires_at)
            .field("refresh_expires_at", &self.refresh_expires_at)
            .finish_non_exhaustive()
    }
}

/// Issues and verifies session tokens with the process-wide secret.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    /// Lifetime of access tokens issued at login.
    access_ttl: String,
    /// Lifetime of refresh tokens issued at login.
    refresh_ttl: String,
}

impl TokenIssuer {
    /// Creates an issuer from auth configuration, rejecting unparseable TTLs.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        for ttl in [&config.access_token_ttl, &config.refresh_token_ttl] {
            parse_ttl(ttl).map_err(|e| AppError::configuration(e.to_string()))?;
        }

        Ok(Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            access_ttl: config.access_token_ttl.clone(),
            refresh_ttl: config.refresh_token_ttl.clone(),
        })
    }

    /// Returns the decoder, e.g. for reading `exp` of a token being revoked.
    pub fn decoder(&self) -> &JwtDecoder {
        &self.decoder
    }

    /// Signs a token embedding `username` and `permission` that expires
    /// `ttl` from now.
    pub fn generate_token(
        &self,
        username: &str,
        permission: &str,
        ttl: &str,
    ) -> Result<String, AuthError> {
        self.encoder.generate_token(username, permission, ttl)
    }

    /// Signature + strict expiry predicate. Never errors.
    pub fn verify_token(&self, token: &str) -> bool {
        self.decoder.verify_token(token)
    }

    /// Username claim of a verified token, or `None`.
    pub fn get_username(&self, token: &str) -> Option<String> {
        self.decoder.get_username(token)
    }

    /// Typed claims of a token that passes `verify_token`.
    pub fn decode_claims(&self, token: &str) -> Option<Claims> {
        self.decoder.decode_claims(token)
    }

    /// Mints a one-hour `"user"` access token for the refresh token's owner.
    ///
    /// The refresh token's expiry is not re-checked here; callers verify it
    /// first.
    pub fn generate_new_access_token(&self, refresh_token: &str) -> Result<String, AuthError> {
        let username = self
            .get_username(refresh_token)
            .ok_or(AuthError::TokenRenewalFailure)?;

        self.generate_token(&username, DEFAULT_PERMISSION, RENEWED_ACCESS_TTL)
    }

    /// Issues the access + refresh pair handed out at login.
    pub fn generate_token_pair(&self, username: &str) -> Result<TokenPair, AuthError> {
        let access_token = self.generate_token(username, DEFAULT_PERMISSION, &self.access_ttl)?;
        let refresh_token =
            self.generate_token(username, DEFAULT_PERMISSION, &self.refresh_ttl)?;

        let expires_at = |token: &str| {
            self.decoder
                .expiry_of(token)
                .and_then(|exp| DateTime::from_timestamp(exp, 0))
                .ok_or_else(|| AuthError::SigningFailure("issued token is unreadable".to_string()))
        };

        Ok(TokenPair {
            access_expires_at: expires_at(&access_token)?,
            refresh_expires_at: expires_at(&refresh_token)?,
            access_token,
            refresh_token,
        })
    }
}
