//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use notevault_core::config::AuthConfig;
use notevault_core::error::AppError;

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// The work factor is taken from configuration for new hashes; verification
/// always uses the parameters embedded in the stored PHC string.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Cost parameters applied to new hashes.
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Self::with_costs(
            config.password_memory_kib,
            config.password_work_factor,
            config.password_parallelism,
        )
    }

    /// Creates a hasher with explicit Argon2 costs.
    pub fn with_costs(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "Argon2 hashing failed");
                AuthError::HashingFailure
            })?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not. A hash
    /// that cannot be parsed or verified yields `ComparisonFailure`.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
            AuthError::ComparisonFailure
        })?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => {
                tracing::warn!(error = %e, "Password verification failed");
                Err(AuthError::ComparisonFailure)
            }
        }
    }
}
