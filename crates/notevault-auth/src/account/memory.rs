//! In-memory credential store, used when no database is wired in and in tests.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use notevault_core::error::AppError;
use notevault_core::result::AppResult;
use notevault_core::traits::CredentialStore;
use notevault_core::types::Credential;

/// Credential store keyed by username.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credentials: DashMap<String, Credential>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn lookup(&self, username: &str) -> AppResult<Option<Credential>> {
        Ok(self.credentials.get(username).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, username: &str, password_hash: &str) -> AppResult<()> {
        match self.credentials.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict("Username already exists")),
            Entry::Vacant(entry) => {
                entry.insert(Credential::new(username, password_hash));
                Ok(())
            }
        }
    }
}
