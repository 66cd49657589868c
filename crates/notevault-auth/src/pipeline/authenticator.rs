//! The authentication pipeline: revocation, access, then refresh fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use notevault_core::traits::RevocationStore;

use crate::error::{AuthError, TokenKind};
use crate::jwt::TokenIssuer;

use super::decision::{AuthDecision, Identity, PipelineStage, TokenTransport};

/// Decides, per request, whether the presented tokens authorize it.
///
/// Shared state is limited to the issuer (read-only secret) and the
/// revocation store; each call is otherwise independent.
#[derive(Clone)]
pub struct AuthPipeline {
    issuer: Arc<TokenIssuer>,
    revocations: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for AuthPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPipeline")
            .field("revocations", &self.revocations)
            .finish_non_exhaustive()
    }
}

impl AuthPipeline {
    /// Creates a pipeline over the given issuer and revocation store.
    pub fn new(issuer: Arc<TokenIssuer>, revocations: Arc<dyn RevocationStore>) -> Self {
        Self {
            issuer,
            revocations,
        }
    }

    /// Runs the pipeline to a terminal decision. Never fails: every internal
    /// error becomes a denial.
    ///
    /// An access token authorizes only when it verifies *and* carries string
    /// `username` and `permission` claims, since both are bound into the
    /// [`Identity`]. A correctly signed token missing either claim is treated
    /// like an unverifiable one and falls through to the refresh check.
    pub async fn authenticate(&self, transport: &TokenTransport) -> AuthDecision {
        if let Some(denied) = self.check_revocations(transport).await {
            return denied;
        }

        let Some(access_token) = transport.access_token() else {
            return deny(PipelineStage::AccessCheck, AuthError::NoTokenFound);
        };

        if self.try_verify(access_token) {
            if let Some(claims) = self.issuer.decode_claims(access_token) {
                debug!(username = %claims.username, "Access token accepted");
                return AuthDecision::Authorized {
                    identity: claims.into(),
                };
            }
            debug!("Verified access token lacks usable claims");
        }

        self.check_refresh(transport)
    }

    /// Single fallback gate: absent, malformed, badly signed, and expired
    /// tokens all read as `false`.
    pub fn try_verify(&self, token: &str) -> bool {
        self.issuer.verify_token(token)
    }

    async fn check_revocations(&self, transport: &TokenTransport) -> Option<AuthDecision> {
        let presented = [
            (TokenKind::Access, transport.access_token()),
            (TokenKind::Refresh, transport.refresh_token()),
        ];

        for (kind, token) in presented {
            let Some(token) = token else { continue };

            match self.revocations.contains(token).await {
                Ok(false) => {}
                Ok(true) => {
                    info!(token_kind = %kind, "Revoked token presented");
                    return Some(deny(
                        PipelineStage::BlacklistCheck,
                        AuthError::TokenRevoked(kind),
                    ));
                }
                Err(e) => {
                    warn!(token_kind = %kind, error = %e, "Revocation lookup failed");
                    return Some(deny(
                        PipelineStage::BlacklistCheck,
                        AuthError::TokenInvalidOrExpired,
                    ));
                }
            }
        }

        None
    }

    fn check_refresh(&self, transport: &TokenTransport) -> AuthDecision {
        let Some(refresh_token) = transport.refresh_token() else {
            return deny(PipelineStage::RefreshCheck, AuthError::NoTokenFound);
        };

        if !self.try_verify(refresh_token) {
            return deny(PipelineStage::RefreshCheck, AuthError::TokenInvalidOrExpired);
        }

        let renewed = self
            .issuer
            .generate_new_access_token(refresh_token)
            .inspect_err(|e| warn!(error = %e, "Access token renewal failed"))
            .ok()
            .and_then(|token| {
                let claims = self.issuer.decode_claims(&token)?;
                Some((token, Identity::from(claims)))
            });

        match renewed {
            Some((access_token, identity)) => {
                info!(username = %identity.username, "Access token renewed from refresh token");
                AuthDecision::AuthorizedRenewed {
                    identity,
                    access_token,
                }
            }
            None => deny(PipelineStage::RefreshCheck, AuthError::TokenInvalidOrExpired),
        }
    }
}

fn deny(stage: PipelineStage, reason: AuthError) -> AuthDecision {
    debug!(stage = %stage, reason = %reason, "Request denied");
    AuthDecision::Denied { stage, reason }
}
