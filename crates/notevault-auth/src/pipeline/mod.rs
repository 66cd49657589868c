//! Per-request authentication decision procedure.
//!
//! ```text
//! START → BLACKLIST_CHECK → ACCESS_CHECK → {AUTHORIZED, REFRESH_CHECK}
//!       → {AUTHORIZED_RENEWED, DENIED}
//! ```

pub mod authenticator;
pub mod decision;

pub use authenticator::AuthPipeline;
pub use decision::{AuthDecision, Identity, PipelineStage, TokenTransport};
