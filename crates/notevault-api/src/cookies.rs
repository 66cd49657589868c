//! Session cookie names and builders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use notevault_auth::TokenTransport;

/// Cookie carrying the access token.
pub const ACCESS_COOKIE: &str = "accessToken";
/// Cookie carrying the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Builds an `HttpOnly`, `SameSite=Strict` session cookie.
pub fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Cookie that clears `name` on the client.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}

/// Reads both session cookies into a [`TokenTransport`].
pub fn transport_from(jar: &CookieJar) -> TokenTransport {
    TokenTransport::new(
        jar.get(ACCESS_COOKIE).map(|c| c.value().to_string()),
        jar.get(REFRESH_COOKIE).map(|c| c.value().to_string()),
    )
}
