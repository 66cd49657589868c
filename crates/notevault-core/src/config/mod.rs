//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Placeholder secret shipped in the defaults; refused outside development.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `NOTEVAULT__`
    /// (e.g. `NOTEVAULT__AUTH__JWT_SECRET`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("NOTEVAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Checks the settings that must hold before any token is signed or any
    /// password is hashed.
    pub fn validate(&self, env: &str) -> Result<(), AppError> {
        let auth = &self.auth;

        if auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if env != "development" && env != "test" && auth.jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret still has its placeholder value (env: {env})"
            )));
        }
        if auth.password_work_factor == 0 {
            return Err(AppError::configuration(
                "auth.password_work_factor must be at least 1",
            ));
        }
        if auth.password_parallelism == 0 {
            return Err(AppError::configuration(
                "auth.password_parallelism must be at least 1",
            ));
        }
        if auth.password_memory_kib < 8 * auth.password_parallelism {
            return Err(AppError::configuration(
                "auth.password_memory_kib must be at least 8 * password_parallelism",
            ));
        }

        Ok(())
    }
}
