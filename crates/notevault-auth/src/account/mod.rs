//! Signup, login, and logout flows over an external credential store.

pub mod memory;
pub mod service;

pub use memory::MemoryCredentialStore;
pub use service::{AccountService, SignupOutcome};
