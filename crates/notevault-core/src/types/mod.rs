//! Shared domain types.

pub mod credential;

pub use credential::Credential;
