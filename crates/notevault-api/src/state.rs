//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use notevault_auth::{AccountService, AuthPipeline, PasswordCredentialManager, TokenIssuer};
use notevault_core::config::AppConfig;
use notevault_core::error::AppError;
use notevault_core::traits::{CredentialStore, RevocationStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for the health endpoint
    pub started_at: Instant,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuer and verifier
    pub issuer: Arc<TokenIssuer>,
    /// Per-request authentication pipeline
    pub pipeline: Arc<AuthPipeline>,
    /// Revoked token registry
    pub revocations: Arc<dyn RevocationStore>,

    // ── Services ─────────────────────────────────────────────
    /// Signup, login, and logout
    pub accounts: Arc<AccountService>,
}

impl AppState {
    /// Wires the auth components together over the given stores.
    pub fn new(
        config: AppConfig,
        credentials: Arc<dyn CredentialStore>,
        revocations: Arc<dyn RevocationStore>,
        passwords: Arc<PasswordCredentialManager>,
    ) -> Result<Self, AppError> {
        let issuer = Arc::new(TokenIssuer::new(&config.auth)?);
        let pipeline = Arc::new(AuthPipeline::new(
            Arc::clone(&issuer),
            Arc::clone(&revocations),
        ));
        let accounts = Arc::new(AccountService::new(
            credentials,
            passwords,
            Arc::clone(&issuer),
            Arc::clone(&revocations),
        )?);

        Ok(Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            issuer,
            pipeline,
            revocations,
            accounts,
        })
    }
}
