//! In-memory revocation registry backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use notevault_core::result::AppResult;
use notevault_core::traits::RevocationStore;

/// Process-local revocation registry.
///
/// Keys are raw token strings; values are the token's own expiry when it
/// could be read, which bounds how long the entry has to be kept.
#[derive(Debug, Default)]
pub struct MemoryRevocationRegistry {
    entries: DashMap<String, Option<i64>>,
}

impl MemoryRevocationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationRegistry {
    async fn contains(&self, token: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(token))
    }

    async fn revoke_until(&self, token: &str, expires_at: Option<i64>) -> AppResult<()> {
        match self.entries.entry(token.to_string()) {
            Entry::Occupied(mut entry) => {
                // An unknown expiry pins the entry forever; otherwise keep the later one.
                let merged = match (*entry.get(), expires_at) {
                    (Some(current), Some(new)) => Some(current.max(new)),
                    _ => None,
                };
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(expires_at);
            }
        }
        tracing::debug!(entries = self.entries.len(), "Token revoked");
        Ok(())
    }

    async fn evict_expired(&self, now: i64) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries
            .retain(|_, expires_at| expires_at.is_none_or(|exp| exp > now));
        Ok(before.saturating_sub(self.entries.len()))
    }

    async fn len(&self) -> AppResult<usize> {
        Ok(self.entries.len())
    }
}
