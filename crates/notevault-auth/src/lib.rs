//! # notevault-auth
//!
//! Credential handling and request authentication for the NoteVault service.
//!
//! ## Modules
//!
//! - `password`: password policy, strength scoring, and Argon2id hashing
//! - `jwt`: HS256 token issuance, verification, and access-token renewal
//! - `revocation`: in-memory revoked-token registry and its expiry sweeper
//! - `pipeline`: per-request decision over access and refresh cookies
//! - `account`: signup, login, and logout over a credential store

pub mod account;
pub mod error;
pub mod jwt;
pub mod password;
pub mod pipeline;
pub mod revocation;

pub use account::{AccountService, MemoryCredentialStore, SignupOutcome};
pub use error::{AuthError, CharacterClass, TokenKind};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenIssuer, TokenPair};
pub use password::{PasswordCredentialManager, PasswordHasher, PasswordStrength, PasswordValidator};
pub use pipeline::{AuthDecision, AuthPipeline, Identity, PipelineStage, TokenTransport};
pub use revocation::{MemoryRevocationRegistry, RevocationSweeper};
