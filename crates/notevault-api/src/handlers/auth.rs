//! Auth handlers for signup, login, logout, and me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use notevault_auth::TokenTransport;

use crate::cookies::{self, ACCESS_COOKIE, REFRESH_COOKIE};
use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{
    ApiResponse, IdentityResponse, LoginResponse, MessageResponse, SignupResponse,
};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<ApiResponse<SignupResponse>>> {
    req.validate()?;

    let outcome = state.accounts.signup(&req.username, &req.password).await?;

    Ok(Json(ApiResponse::ok(outcome.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let pair = state.accounts.login(&req.username, &req.password).await?;

    let secure = state.config.server.cookie_secure;
    let jar = jar
        .add(cookies::session_cookie(
            ACCESS_COOKIE,
            pair.access_token.clone(),
            secure,
        ))
        .add(cookies::session_cookie(
            REFRESH_COOKIE,
            pair.refresh_token.clone(),
            secure,
        ));

    Ok((jar, Json(ApiResponse::ok(pair.into()))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    let mut revoked = state.accounts.logout(&cookies::transport_from(&jar)).await?;

    // The token minted for this very request was never sent by the client.
    if let Some(renewed) = auth.renewed_access_token.clone() {
        revoked += state
            .accounts
            .logout(&TokenTransport::new(Some(renewed), None))
            .await?;
    }

    tracing::info!(username = %auth.username, revoked, "User logged out");

    let jar = jar
        .remove(cookies::removal_cookie(ACCESS_COOKIE))
        .remove(cookies::removal_cookie(REFRESH_COOKIE));

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<IdentityResponse>> {
    Json(ApiResponse::ok(IdentityResponse::new(
        &auth.identity,
        auth.renewed(),
    )))
}
