//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use notevault_api::{AppState, build_app};
use notevault_auth::jwt::{Claims, JwtEncoder};
use notevault_auth::password::{PasswordHasher, PasswordValidator, StrengthEstimator};
use notevault_auth::{MemoryCredentialStore, MemoryRevocationRegistry, PasswordCredentialManager};
use notevault_core::config::AppConfig;

pub const ACCESS_COOKIE: &str = "accessToken";
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Scores every password the same, so policy tests do not depend on the
/// dictionary estimator.
#[derive(Debug)]
pub struct FixedScore(pub u8);

impl StrengthEstimator for FixedScore {
    fn score(&self, _password: &str) -> u8 {
        self.0
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Shared state, for reaching the stores directly
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application whose estimator scores every password 3.
    pub fn new() -> Self {
        Self::with_score(3)
    }

    /// Create a test application with a fixed strength score.
    pub fn with_score(score: u8) -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.server.cookie_secure = false;

        let passwords = PasswordCredentialManager::from_parts(
            PasswordValidator::with_estimator(Arc::new(FixedScore(score))),
            PasswordHasher::with_costs(1024, 1, 1).expect("Failed to build hasher"),
        );

        let state = AppState::new(
            config.clone(),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(MemoryRevocationRegistry::new()),
            Arc::new(passwords),
        )
        .expect("Failed to build app state");

        let router = build_app(state.clone());

        Self {
            router,
            state,
            config,
        }
    }

    /// Sign up a user, asserting success.
    pub async fn signup(&self, username: &str, password: &str) -> TestResponse {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({ "username": username, "password": password })),
                &[],
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );
        response
    }

    /// Log in and return `(access_token, refresh_token)`.
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                &[],
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let data = &response.body["data"];
        let access = data["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string();
        let refresh = data["refresh_token"]
            .as_str()
            .expect("No refresh_token in login response")
            .to_string();
        (access, refresh)
    }

    /// A correctly signed access token that expired two hours ago.
    pub fn expired_access_token(&self, username: &str) -> String {
        let now = Utc::now().timestamp();
        JwtEncoder::from_secret(self.config.auth.jwt_secret.as_bytes())
            .encode_claims(&Claims::new(username, "user", now - 3 * 3600, now - 2 * 3600))
            .expect("Failed to sign expired token")
    }

    /// Make an HTTP request to the test app, sending `cookies` in a
    /// `Cookie` header.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookies: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if !cookies.is_empty() {
            let cookie_header = cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            req = req.header(header::COOKIE, cookie_header);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookies,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header values
    pub set_cookies: Vec<String>,
}

impl TestResponse {
    /// The full `Set-Cookie` line for `name`, if the response set it.
    pub fn set_cookie_line(&self, name: &str) -> Option<&str> {
        self.set_cookies
            .iter()
            .map(String::as_str)
            .find(|line| line.split_once('=').is_some_and(|(n, _)| n == name))
    }

    /// The value the response set for cookie `name`.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let line = self.set_cookie_line(name)?;
        let (_, rest) = line.split_once('=')?;
        Some(rest.split(';').next().unwrap_or_default().to_string())
    }

    /// The error message of a failed response.
    pub fn message(&self) -> Option<&str> {
        self.body["message"].as_str()
    }
}
