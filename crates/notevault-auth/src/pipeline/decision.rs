//! Inputs and outcomes of the authentication pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::jwt::Claims;

/// Tokens carried by one request (conventionally the `accessToken` and
/// `refreshToken` cookies). Empty values count as absent.
#[derive(Clone, Default)]
pub struct TokenTransport {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl TokenTransport {
    /// Builds a transport from the raw request values.
    pub fn new(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.is_empty()),
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
        }
    }

    /// The presented access token, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The presented refresh token, if any.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

impl fmt::Debug for TokenTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenTransport")
            .field("has_access_token", &self.access_token.is_some())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish()
    }
}

/// Who the request is acting as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Authenticated username.
    pub username: String,
    /// Permission claim of the token that authorized the request.
    pub permission: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            permission: claims.permission,
        }
    }
}

/// Stage at which the pipeline made its decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Revocation lookup of both tokens.
    BlacklistCheck,
    /// Access token verification.
    AccessCheck,
    /// Refresh token verification and renewal.
    RefreshCheck,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlacklistCheck => write!(f, "blacklist_check"),
            Self::AccessCheck => write!(f, "access_check"),
            Self::RefreshCheck => write!(f, "refresh_check"),
        }
    }
}

/// Terminal outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// The access token was valid.
    Authorized {
        /// Identity from the access token.
        identity: Identity,
    },
    /// The access token was unusable but the refresh token minted a new one.
    AuthorizedRenewed {
        /// Identity bound to the new access token.
        identity: Identity,
        /// Newly minted access token for the response layer to hand back.
        access_token: String,
    },
    /// The request must not proceed.
    Denied {
        /// Stage that denied the request.
        stage: PipelineStage,
        /// Client-facing reason.
        reason: AuthError,
    },
}

impl AuthDecision {
    /// Identity the request proceeds with, if authorized.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authorized { identity } | Self::AuthorizedRenewed { identity, .. } => {
                Some(identity)
            }
            Self::Denied { .. } => None,
        }
    }

    /// Returns `true` for either authorized outcome.
    pub fn is_authorized(&self) -> bool {
        self.identity().is_some()
    }

    /// HTTP status of a denial (always 401); `None` when authorized.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Denied { reason, .. } => Some(reason.status_code()),
            _ => None,
        }
    }
}
