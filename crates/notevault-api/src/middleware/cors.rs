//! CORS layer configuration.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use notevault_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// With a wildcard origin, credentials are not allowed, so browsers will not
/// send the session cookies cross-origin. Listing explicit origins enables
/// credentialed requests.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let max_age = std::time::Duration::from_secs(config.max_age_seconds);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .max_age(max_age);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(max_age)
}
