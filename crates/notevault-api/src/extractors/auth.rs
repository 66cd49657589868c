//! `AuthUser` extractor. Reads the identity bound by the session middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notevault_auth::{AuthError, Identity};

use crate::error::ApiError;
use crate::middleware::auth::RenewedAccessToken;

/// Authenticated user available in handlers behind
/// [`require_session`](crate::middleware::auth::require_session).
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Bound identity.
    pub identity: Identity,
    /// Access token minted for this request, when the presented one had
    /// to be renewed.
    pub renewed_access_token: Option<String>,
}

impl AuthUser {
    /// Whether the access token was renewed on this request.
    pub fn renewed(&self) -> bool {
        self.renewed_access_token.is_some()
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent only on routes mounted without the session layer.
        let identity = parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or(AuthError::NoTokenFound)?;

        let renewed_access_token = parts
            .extensions
            .get::<RenewedAccessToken>()
            .map(|t| t.0.clone());

        Ok(AuthUser {
            identity,
            renewed_access_token,
        })
    }
}
