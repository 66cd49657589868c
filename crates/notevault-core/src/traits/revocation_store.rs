//! Revocation store trait for tokens rejected before their natural expiry.

use async_trait::async_trait;

use crate::result::AppResult;

/// Set of raw token strings that must be rejected even when their signature
/// and expiry are valid.
///
/// `revoke` and `contains` must be linearizable with respect to each other:
/// once `revoke(t)` returns, every later `contains(t)` observes it.
#[async_trait]
pub trait RevocationStore: Send + Sync + std::fmt::Debug + 'static {
    /// Returns `true` if `token` has been revoked.
    async fn contains(&self, token: &str) -> AppResult<bool>;

    /// Revokes `token`. `expires_at` is the token's own `exp` (seconds since
    /// epoch) when known; entries without one are kept for the process
    /// lifetime.
    async fn revoke_until(&self, token: &str, expires_at: Option<i64>) -> AppResult<()>;

    /// Revokes `token` with no known expiry.
    async fn revoke(&self, token: &str) -> AppResult<()> {
        self.revoke_until(token, None).await
    }

    /// Drops entries whose recorded expiry is at or before `now`.
    /// Returns the number of entries removed.
    async fn evict_expired(&self, now: i64) -> AppResult<usize>;

    /// Number of entries currently held.
    async fn len(&self) -> AppResult<usize>;
}
