//! Signup hashing and login verification built from the validator and hasher.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use notevault_core::config::AuthConfig;
use notevault_core::error::AppError;

use crate::error::AuthError;

use super::hasher::PasswordHasher;
use super::validator::{PasswordStrength, PasswordValidator, StrengthEstimator};

/// Result of hashing a policy-compliant password.
#[derive(Clone, Serialize, Deserialize)]
pub struct HashedPassword {
    /// PHC-format Argon2id hash.
    pub hashed_password: String,
    /// Strength label of the original password.
    pub strength: PasswordStrength,
}

impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedPassword")
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

/// Outcome of comparing a candidate password with a stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCheck {
    /// Whether the password matched.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl PasswordCheck {
    fn matched() -> Self {
        Self {
            success: true,
            message: "Password is correct".to_string(),
        }
    }

    fn mismatched() -> Self {
        Self {
            success: false,
            message: "Password is incorrect".to_string(),
        }
    }
}

/// Enforces the signup password policy and verifies login attempts.
///
/// Both operations are CPU-bound; async callers run them
/// on the blocking pool.
#[derive(Debug, Clone)]
pub struct PasswordCredentialManager {
    validator: PasswordValidator,
    hasher: PasswordHasher,
}

impl PasswordCredentialManager {
    /// Creates a manager using the configured work factor and zxcvbn scoring.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            validator: PasswordValidator::new(),
            hasher: PasswordHasher::new(config)?,
        })
    }

    /// Creates a manager from explicit parts.
    pub fn from_parts(validator: PasswordValidator, hasher: PasswordHasher) -> Self {
        Self { validator, hasher }
    }

    /// Replaces the strength estimator.
    pub fn with_estimator(mut self, estimator: Arc<dyn StrengthEstimator>) -> Self {
        self.validator = PasswordValidator::with_estimator(estimator);
        self
    }

    /// Validates and hashes a new password.
    pub fn hash_password(&self, password: &str) -> Result<HashedPassword, AuthError> {
        let strength = self.validator.validate(password)?;
        let hashed_password = self.hasher.hash_password(password)?;
        Ok(HashedPassword {
            hashed_password,
            strength,
        })
    }

    /// Compares a candidate password with a stored hash in constant time.
    ///
    /// A mismatch is a normal outcome (`success == false`), not an error.
    pub fn check_password(&self, password: &str, hash: &str) -> Result<PasswordCheck, AuthError> {
        if password.is_empty() || hash.is_empty() {
            return Err(AuthError::InvalidCredentialFormat("Invalid input parameters"));
        }

        if self.hasher.verify_password(password, hash)? {
            Ok(PasswordCheck::matched())
        } else {
            Ok(PasswordCheck::mismatched())
        }
    }

    /// Hashes without policy checks; used for timing-equalisation dummies.
    pub(crate) fn hash_unchecked(&self, password: &str) -> Result<String, AuthError> {
        self.hasher.hash_password(password)
    }
}
