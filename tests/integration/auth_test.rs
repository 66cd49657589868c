//! Integration tests for signup and login.

use http::StatusCode;

use crate::helpers::{ACCESS_COOKIE, REFRESH_COOKIE, TestApp};

#[tokio::test]
async fn test_signup_reports_medium_strength() {
    let app = TestApp::new();

    let response = app.signup("alice", "aA1!aaaa").await;

    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["strength"], "medium");
    assert_eq!(
        response.body["data"]["message"],
        "Password strength is medium."
    );
}

#[tokio::test]
async fn test_signup_reports_strong_strength() {
    let app = TestApp::with_score(4);

    let response = app.signup("alice", "aA1!aaaa").await;

    assert_eq!(response.body["data"]["strength"], "strong");
}

#[tokio::test]
async fn test_signup_rejects_low_score() {
    let app = TestApp::with_score(2);

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "username": "alice", "password": "aA1!aaaa" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        Some("Password is too weak. Please choose a stronger password.")
    );
}

#[tokio::test]
async fn test_signup_names_missing_character_class() {
    let app = TestApp::new();

    for (password, expected) in [
        ("AA1!AAAA", "Password must contain a lowercase character"),
        ("aa1!aaaa", "Password must contain an uppercase character"),
        ("aAb!aaaa", "Password must contain a number"),
        ("aA1baaaa", "Password must contain a special character"),
        ("   ", "Invalid password"),
    ] {
        let response = app
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({ "username": "alice", "password": password })),
                &[],
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{password}");
        assert_eq!(response.message(), Some(expected));
    }
}

#[tokio::test]
async fn test_signup_requires_username() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "password": "aA1!aaaa" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.message(), Some("Username is required"));
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let app = TestApp::new();
    app.signup("alice", "aA1!aaaa").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({ "username": "alice", "password": "aA1!bbbb" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), Some("Username already exists"));
}

#[tokio::test]
async fn test_login_returns_tokens_and_sets_cookies() {
    let app = TestApp::new();
    app.signup("alice", "aA1!aaaa").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": "aA1!aaaa" })),
            &[],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let access = response.body["data"]["access_token"].as_str().unwrap();
    let refresh = response.body["data"]["refresh_token"].as_str().unwrap();
    assert!(!access.is_empty());
    assert!(!refresh.is_empty());

    assert_eq!(response.cookie(ACCESS_COOKIE).as_deref(), Some(access));
    assert_eq!(response.cookie(REFRESH_COOKIE).as_deref(), Some(refresh));

    let line = response.set_cookie_line(ACCESS_COOKIE).unwrap();
    assert!(line.contains("HttpOnly"));
    assert!(line.contains("SameSite=Strict"));

    assert!(app.state.issuer.verify_token(access));
    assert_eq!(app.state.issuer.get_username(refresh).as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new();
    app.signup("alice", "aA1!aaaa").await;

    for body in [
        serde_json::json!({ "username": "alice", "password": "aA1!zzzz" }),
        serde_json::json!({ "username": "nobody", "password": "aA1!aaaa" }),
        serde_json::json!({ "username": "alice" }),
        serde_json::json!({}),
    ] {
        let response = app.request("POST", "/api/auth/login", Some(body), &[]).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.message(), Some("Invalid username or password"));
        assert!(response.set_cookies.is_empty());
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
