//! Stored signup credential.

use serde::{Deserialize, Serialize};

/// A username paired with its password hash.
///
/// Created at signup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique, non-empty username.
    pub username: String,
    /// Opaque PHC-format password hash.
    pub password_hash: String,
}

impl Credential {
    /// Creates a credential record.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
