//! # notevault-core
//!
//! Core crate for NoteVault. Contains configuration schemas, the credential
//! model, the credential store trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other NoteVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
