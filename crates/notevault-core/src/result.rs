//! Convenience result type alias for NoteVault.

use crate::error::AppError;

/// A specialized `Result` type for NoteVault operations.
pub type AppResult<T> = Result<T, AppError>;
