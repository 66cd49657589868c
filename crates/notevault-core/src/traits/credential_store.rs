//! Credential store trait for username + password-hash persistence.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::Credential;

/// Storage for signup credentials.
///
/// The authentication layer only produces and consumes password hashes; the
/// store owns the records. Implementations may be backed by a relational
/// database or kept in memory.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Looks up the credential for `username`. Returns `None` if the user
    /// does not exist.
    async fn lookup(&self, username: &str) -> AppResult<Option<Credential>>;

    /// Inserts a new credential.
    ///
    /// Fails with an [`ErrorKind::Conflict`](crate::error::ErrorKind::Conflict)
    /// error if the username is already taken.
    async fn insert(&self, username: &str, password_hash: &str) -> AppResult<()>;
}
