//! Integration tests for the cookie session middleware.

use http::StatusCode;

use crate::helpers::{ACCESS_COOKIE, REFRESH_COOKIE, TestApp};

async fn logged_in(app: &TestApp) -> (String, String) {
    app.signup("alice", "aA1!aaaa").await;
    app.login("alice", "aA1!aaaa").await
}

#[tokio::test]
async fn test_me_with_valid_access_token() {
    let app = TestApp::new();
    let (access, _) = logged_in(&app).await;

    let response = app
        .request("GET", "/api/auth/me", None, &[(ACCESS_COOKIE, &access)])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["permission"], "user");
    assert_eq!(response.body["data"]["renewed"], false);
    assert!(response.set_cookies.is_empty());
}

#[tokio::test]
async fn test_no_cookies_denied() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(
        response.message(),
        Some("No token found. Authorization denied.")
    );
}

#[tokio::test]
async fn test_empty_cookie_counts_as_absent() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, &[(ACCESS_COOKIE, "")])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        Some("No token found. Authorization denied.")
    );
}

#[tokio::test]
async fn test_expired_access_renewed_from_refresh() {
    let app = TestApp::new();
    let (_, refresh) = logged_in(&app).await;
    let expired = app.expired_access_token("alice");
    assert!(!app.state.issuer.verify_token(&expired));

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            &[(ACCESS_COOKIE, &expired), (REFRESH_COOKIE, &refresh)],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["permission"], "user");
    assert_eq!(response.body["data"]["renewed"], true);

    let renewed = response.cookie(ACCESS_COOKIE).expect("No renewed accessToken cookie");
    assert!(app.state.issuer.verify_token(&renewed));
    assert_eq!(app.state.issuer.get_username(&renewed).as_deref(), Some("alice"));

    // The renewed token works on its own.
    let follow_up = app
        .request("GET", "/api/auth/me", None, &[(ACCESS_COOKIE, &renewed)])
        .await;
    assert_eq!(follow_up.status, StatusCode::OK);
    assert_eq!(follow_up.body["data"]["renewed"], false);
}

#[tokio::test]
async fn test_expired_access_without_refresh_denied() {
    let app = TestApp::new();
    let expired = app.expired_access_token("alice");

    let response = app
        .request("GET", "/api/auth/me", None, &[(ACCESS_COOKIE, &expired)])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        Some("No token found. Authorization denied.")
    );
}

#[tokio::test]
async fn test_invalid_tokens_denied() {
    let app = TestApp::new();
    let (access, _) = logged_in(&app).await;

    let mut tampered = access.clone();
    tampered.push('x');

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            &[(ACCESS_COOKIE, "garbage"), (REFRESH_COOKIE, &tampered)],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        Some("Token is invalid. Authorization denied.")
    );
}

#[tokio::test]
async fn test_revoked_access_token_denied_even_with_refresh() {
    let app = TestApp::new();
    let (access, refresh) = logged_in(&app).await;
    app.state.revocations.revoke(&access).await.unwrap();

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            &[(ACCESS_COOKIE, &access), (REFRESH_COOKIE, &refresh)],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        Some("Access token is revoked. Authorization denied.")
    );
}

#[tokio::test]
async fn test_revoked_refresh_token_denied_even_with_valid_access() {
    let app = TestApp::new();
    let (access, refresh) = logged_in(&app).await;
    app.state.revocations.revoke(&refresh).await.unwrap();

    let response = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            &[(ACCESS_COOKIE, &access), (REFRESH_COOKIE, &refresh)],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        Some("Refresh token is revoked. Authorization denied.")
    );
}

#[tokio::test]
async fn test_logout_revokes_and_clears_cookies() {
    let app = TestApp::new();
    let (access, refresh) = logged_in(&app).await;
    let cookies = [(ACCESS_COOKIE, access.as_str()), (REFRESH_COOKIE, refresh.as_str())];

    let response = app.request("POST", "/api/auth/logout", None, &cookies).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "Logged out successfully");
    for name in [ACCESS_COOKIE, REFRESH_COOKIE] {
        let line = response.set_cookie_line(name).expect("cookie not cleared");
        assert!(line.contains("Max-Age=0"), "{line}");
    }

    let again = app.request("GET", "/api/auth/me", None, &cookies).await;
    assert_eq!(again.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        again.message(),
        Some("Access token is revoked. Authorization denied.")
    );
}

#[tokio::test]
async fn test_logout_after_renewal_revokes_renewed_token() {
    let app = TestApp::new();
    let (_, refresh) = logged_in(&app).await;
    let expired = app.expired_access_token("alice");

    let response = app
        .request(
            "POST",
            "/api/auth/logout",
            None,
            &[(ACCESS_COOKIE, &expired), (REFRESH_COOKIE, &refresh)],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cleared = response.set_cookie_line(ACCESS_COOKIE).unwrap();
    assert!(cleared.contains("Max-Age=0"), "{cleared}");
    // Expired access, refresh, and the token minted for the logout request.
    assert_eq!(app.state.revocations.len().await.unwrap(), 3);
}
