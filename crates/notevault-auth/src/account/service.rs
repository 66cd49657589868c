//! Account lifecycle: signup, login, logout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use notevault_core::error::AppError;
use notevault_core::traits::{CredentialStore, RevocationStore};

use crate::jwt::{TokenIssuer, TokenPair};
use crate::password::{PasswordCredentialManager, PasswordStrength};
use crate::pipeline::TokenTransport;

/// The only message a failed login ever produces.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password";

/// Result of a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupOutcome {
    /// The new username.
    pub username: String,
    /// Strength label of the accepted password.
    pub strength: PasswordStrength,
}

/// Coordinates the credential store, password manager, token issuer, and
/// revocation store for the account endpoints.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    passwords: Arc<PasswordCredentialManager>,
    issuer: Arc<TokenIssuer>,
    revocations: Arc<dyn RevocationStore>,
    /// Verified against when the username is unknown, so both paths cost the same.
    dummy_hash: Arc<str>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("store", &self.store)
            .field("revocations", &self.revocations)
            .finish_non_exhaustive()
    }
}

impl AccountService {
    /// Creates the service. Computes one throwaway hash up front.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        passwords: Arc<PasswordCredentialManager>,
        issuer: Arc<TokenIssuer>,
        revocations: Arc<dyn RevocationStore>,
    ) -> Result<Self, AppError> {
        let dummy_hash = passwords.hash_unchecked("notevault-timing-equaliser")?;

        Ok(Self {
            store,
            passwords,
            issuer,
            revocations,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// Registers a new user after enforcing the password policy.
    ///
    /// Hashing runs on the blocking pool.
    pub async fn signup(&self, username: &str, password: &str) -> Result<SignupOutcome, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        let passwords = Arc::clone(&self.passwords);
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || passwords.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;

        self.store.insert(username, &hashed.hashed_password).await?;

        info!(username = %username, strength = %hashed.strength, "User signed up");

        Ok(SignupOutcome {
            username: username.to_string(),
            strength: hashed.strength,
        })
    }

    /// Verifies credentials and issues an access + refresh token pair.
    ///
    /// Every failure, including store and comparison errors, surfaces as the
    /// same authentication error.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let credential = match self.store.lookup(username).await {
            Ok(credential) => credential,
            Err(e) => {
                error!(error = %e, "Credential lookup failed during login");
                return Err(invalid_login());
            }
        };

        let known_user = credential.is_some();
        let hash = match credential {
            Some(credential) => credential.password_hash,
            None => self.dummy_hash.to_string(),
        };

        let passwords = Arc::clone(&self.passwords);
        let password = password.to_owned();
        let matched = match tokio::task::spawn_blocking(move || {
            passwords.check_password(&password, &hash)
        })
        .await
        {
            Ok(Ok(check)) => check.success,
            Ok(Err(e)) => {
                warn!(error = %e, "Password comparison failed during login");
                false
            }
            Err(e) => {
                error!(error = %e, "Password comparison task failed");
                false
            }
        };

        if !(known_user && matched) {
            info!(username = %username, "Login rejected");
            return Err(invalid_login());
        }

        let tokens = self.issuer.generate_token_pair(username).map_err(|e| {
            error!(error = %e, "Token issuance failed during login");
            invalid_login()
        })?;

        info!(username = %username, "Login successful");
        Ok(tokens)
    }

    /// Revokes every token presented with the request. Returns how many were
    /// revoked.
    pub async fn logout(&self, transport: &TokenTransport) -> Result<usize, AppError> {
        let mut revoked = 0;
        for token in [transport.access_token(), transport.refresh_token()]
            .into_iter()
            .flatten()
        {
            let expires_at = self.issuer.decoder().expiry_of(token);
            self.revocations.revoke_until(token, expires_at).await?;
            revoked += 1;
        }

        info!(revoked, "Session tokens revoked");
        Ok(revoked)
    }
}

fn invalid_login() -> AppError {
    AppError::authentication(INVALID_LOGIN_MESSAGE)
}
