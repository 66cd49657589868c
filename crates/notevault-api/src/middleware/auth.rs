//! Cookie session middleware.
//!
//! Runs the [`AuthPipeline`](notevault_auth::AuthPipeline) on the request's
//! `accessToken` / `refreshToken` cookies. Authorized requests continue with
//! the [`Identity`](notevault_auth::Identity) bound as an extension; a
//! renewed access token is also bound and written back as a cookie.

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use notevault_auth::AuthDecision;

use crate::cookies::{self, ACCESS_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Access token minted by the pipeline for the current request.
#[derive(Clone)]
pub struct RenewedAccessToken(pub String);

impl std::fmt::Debug for RenewedAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RenewedAccessToken([REDACTED])")
    }
}

/// Rejects requests the pipeline denies with 401 and the pipeline's message.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let transport = cookies::transport_from(&jar);

    match state.pipeline.authenticate(&transport).await {
        AuthDecision::Authorized { identity } => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        AuthDecision::AuthorizedRenewed {
            identity,
            access_token,
        } => {
            request.extensions_mut().insert(identity);
            request
                .extensions_mut()
                .insert(RenewedAccessToken(access_token.clone()));

            let response = next.run(request).await;
            if sets_cookie(&response, ACCESS_COOKIE) {
                return response;
            }

            let secure = state.config.server.cookie_secure;
            let jar = CookieJar::new().add(cookies::session_cookie(
                ACCESS_COOKIE,
                access_token,
                secure,
            ));
            (jar, response).into_response()
        }
        AuthDecision::Denied { stage, reason } => {
            debug!(stage = %stage, reason = %reason, "Request denied");
            ApiError::from(reason).into_response()
        }
    }
}

/// Whether a handler already wrote (or cleared) the cookie `name`.
fn sets_cookie(response: &Response, name: &str) -> bool {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| {
            v.split_once('=')
                .is_some_and(|(cookie_name, _)| cookie_name.trim() == name)
        })
}
