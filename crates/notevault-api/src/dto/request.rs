//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request body. Missing fields deserialize as empty strings so the
/// validation message, not a JSON rejection, reaches the client.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Username.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Password. Policy is enforced by the password manager.
    #[serde(default)]
    pub password: String,
}

/// Login request body.
///
/// Not validated: every login failure answers with the same 401.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
