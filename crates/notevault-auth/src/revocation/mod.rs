//! Token revocation registry and its periodic sweeper.

pub mod memory;
pub mod sweeper;

pub use memory::MemoryRevocationRegistry;
pub use sweeper::RevocationSweeper;
