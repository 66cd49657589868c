//! JWT claims structure used in access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every token.
///
/// Access and refresh tokens share this shape; they differ only in TTL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub username: String,
    /// Permission level, e.g. `"user"`.
    pub permission: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID. Keeps two tokens minted in the same second distinct, since
    /// revocation is keyed on the raw token string. Nil when absent.
    #[serde(default)]
    pub jti: Uuid,
}

impl Claims {
    /// Builds claims for a fresh token with a random `jti`.
    pub fn new(username: &str, permission: &str, iat: i64, exp: i64) -> Self {
        Self {
            username: username.to_string(),
            permission: permission.to_string(),
            iat,
            exp,
            jti: Uuid::new_v4(),
        }
    }
}
