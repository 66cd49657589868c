//! # notevault-api
//!
//! HTTP API layer for NoteVault built on Axum.
//!
//! Provides the account endpoints, the cookie-based session middleware,
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
