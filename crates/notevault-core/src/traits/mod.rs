//! Core traits defined in `notevault-core` and implemented by other crates.

pub mod credential_store;
pub mod revocation_store;

pub use credential_store::CredentialStore;
pub use revocation_store::RevocationStore;
