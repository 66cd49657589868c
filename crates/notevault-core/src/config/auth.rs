//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing, password hashing, and revocation settings.
///
/// Loaded once at startup and never rotated while the process runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token lifetime, e.g. `"1h"`.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl: String,
    /// Refresh token lifetime, e.g. `"7d"`.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl: String,
    /// Argon2 time cost (iterations).
    #[serde(default = "default_work_factor")]
    pub password_work_factor: u32,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub password_memory_kib: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub password_parallelism: u32,
    /// Seconds between revocation sweeps; `0` disables the sweeper.
    #[serde(default = "default_sweep_interval")]
    pub revocation_sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_token_ttl: default_access_ttl(),
            refresh_token_ttl: default_refresh_ttl(),
            password_work_factor: default_work_factor(),
            password_memory_kib: default_memory_kib(),
            password_parallelism: default_parallelism(),
            revocation_sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_jwt_secret() -> String {
    super::DEFAULT_JWT_SECRET.to_string()
}

fn default_access_ttl() -> String {
    "1h".to_string()
}

fn default_refresh_ttl() -> String {
    "7d".to_string()
}

fn default_work_factor() -> u32 {
    3
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_parallelism() -> u32 {
    1
}

fn default_sweep_interval() -> u64 {
    300
}
