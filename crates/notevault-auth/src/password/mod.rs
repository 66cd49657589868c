//! Password hashing, policy enforcement, and verification.

pub mod hasher;
pub mod manager;
pub mod validator;

pub use hasher::PasswordHasher;
pub use manager::{HashedPassword, PasswordCheck, PasswordCredentialManager};
pub use validator::{PasswordStrength, PasswordValidator, StrengthEstimator, ZxcvbnEstimator};
