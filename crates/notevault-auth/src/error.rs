//! Typed failures raised by the password, token, and pipeline components.

use std::fmt;

use thiserror::Error;

use notevault_core::error::{AppError, ErrorKind};

/// Character class required by the password composition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// One of the fixed special characters.
    Special,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lowercase => write!(f, "a lowercase character"),
            Self::Uppercase => write!(f, "an uppercase character"),
            Self::Digit => write!(f, "a number"),
            Self::Special => write!(f, "a special character"),
        }
    }
}

/// Which of the two transported tokens a decision refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived access token.
    Access,
    /// Long-lived refresh token.
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "Access"),
            Self::Refresh => write!(f, "Refresh"),
        }
    }
}

/// Errors raised by the authentication core.
///
/// Expected negative outcomes (a password mismatch, a token that fails
/// verification) are not errors and never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Empty, whitespace-only, or otherwise unusable credential input.
    #[error("{0}")]
    InvalidCredentialFormat(&'static str),
    /// The password lacks a required character class.
    #[error("Password must contain {0}")]
    WeakPasswordComposition(CharacterClass),
    /// The password passed composition but scored below the strength gate.
    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,
    /// The hash comparison itself failed (as opposed to a mismatch).
    #[error("Error comparing passwords")]
    ComparisonFailure,
    /// The adaptive hash could not be computed.
    #[error("Password hashing failed")]
    HashingFailure,
    /// Token generation inputs were unusable.
    #[error("Invalid input parameters: {0}")]
    InvalidTokenRequest(String),
    /// The token could not be signed.
    #[error("Failed to sign token: {0}")]
    SigningFailure(String),
    /// No username could be derived from the refresh token.
    #[error("Unable to derive identity from refresh token")]
    TokenRenewalFailure,
    /// Neither an access nor a usable refresh token was presented.
    #[error("No token found. Authorization denied.")]
    NoTokenFound,
    /// The presented token has been explicitly revoked.
    #[error("{0} token is revoked. Authorization denied.")]
    TokenRevoked(TokenKind),
    /// The token failed signature or expiry verification.
    #[error("Token is invalid. Authorization denied.")]
    TokenInvalidOrExpired,
}

impl AuthError {
    /// Maps the error onto the workspace-wide error categories.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredentialFormat(_)
            | Self::WeakPasswordComposition(_)
            | Self::WeakPassword
            | Self::InvalidTokenRequest(_) => ErrorKind::Validation,
            Self::ComparisonFailure | Self::HashingFailure | Self::SigningFailure(_) => {
                ErrorKind::Internal
            }
            Self::TokenRenewalFailure
            | Self::NoTokenFound
            | Self::TokenRevoked(_)
            | Self::TokenInvalidOrExpired => ErrorKind::Authentication,
        }
    }

    /// HTTP status a client sees for this error.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::Authentication => 401,
            _ => 500,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}
