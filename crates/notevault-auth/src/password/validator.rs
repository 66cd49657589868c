//! Password policy enforcement for new passwords.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, CharacterClass};

/// Characters accepted as the "special" class.
pub const SPECIAL_CHARACTERS: &str = "~`!@#$%^&*,.";

/// Minimum strength score accepted at signup.
pub const MIN_STRENGTH_SCORE: u8 = 3;

/// Heuristic guessability estimate on a 0–4 scale.
pub trait StrengthEstimator: Send + Sync + fmt::Debug {
    /// Scores `password`; higher is harder to guess.
    fn score(&self, password: &str) -> u8;
}

/// Strength estimator backed by zxcvbn's pattern matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn score(&self, password: &str) -> u8 {
        zxcvbn::zxcvbn(password, &[]).score() as u8
    }
}

/// Strength label reported for an accepted password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// Score exactly at the gate.
    Medium,
    /// Score above the gate.
    Strong,
}

impl PasswordStrength {
    /// Maps a score that already passed the gate to its label.
    fn from_score(score: u8) -> Self {
        if score >= 4 { Self::Strong } else { Self::Medium }
    }

    /// Short label: `"medium"` or `"strong"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }

    /// Sentence suitable for a signup response.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Medium => "Password strength is medium.",
            Self::Strong => "Password strength is strong.",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validates password composition and strength.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    estimator: Arc<dyn StrengthEstimator>,
}

impl PasswordValidator {
    /// Creates a validator using the zxcvbn estimator.
    pub fn new() -> Self {
        Self::with_estimator(Arc::new(ZxcvbnEstimator))
    }

    /// Creates a validator with a custom strength estimator.
    pub fn with_estimator(estimator: Arc<dyn StrengthEstimator>) -> Self {
        Self { estimator }
    }

    /// Validates a password against the composition rules and the
    /// strength gate, returning the strength label on success.
    ///
    /// The first violation found is reported.
    pub fn validate(&self, password: &str) -> Result<PasswordStrength, AuthError> {
        if password.trim().is_empty() {
            return Err(AuthError::InvalidCredentialFormat("Invalid password"));
        }

        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AuthError::WeakPasswordComposition(CharacterClass::Lowercase));
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AuthError::WeakPasswordComposition(CharacterClass::Uppercase));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AuthError::WeakPasswordComposition(CharacterClass::Digit));
        }

        if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            return Err(AuthError::WeakPasswordComposition(CharacterClass::Special));
        }

        let score = self.estimator.score(password);
        if score < MIN_STRENGTH_SCORE {
            return Err(AuthError::WeakPassword);
        }

        Ok(PasswordStrength::from_score(score))
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new()
    }
}
