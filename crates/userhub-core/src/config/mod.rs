//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional environment overlay, and `USERHUB__*`
//! environment variables. Every field has a default, so the service starts
//! without any file present.

pub mod app;
pub mod auth;
pub mod cache;
pub mod database;
pub mod logging;
pub mod rate_limit;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, BasicAuthConfig, TokenConfig};
pub use self::cache::{CacheConfig, MemoryCacheConfig, RedisCacheConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::rate_limit::RateLimiterConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Cache provider settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Fixed-window rate limiter settings.
    #[serde(default)]
    pub rate_limiter: RateLimiterConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration keys holding comma-separated lists when set from the
/// environment.
const LIST_KEYS: [&str; 4] = [
    "server.cors.allowed_origins",
    "server.cors.allowed_methods",
    "server.cors.allowed_headers",
    "server.cors.exposed_headers",
];

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml`, the environment-specific overlay
    /// `config/{env}.toml`, and environment variables prefixed with
    /// `USERHUB__` (e.g. `USERHUB__AUTH__TOKEN__SECRET`). List keys such as
    /// `USERHUB__SERVER__CORS__ALLOWED_ORIGINS` take comma-separated values.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_with(env, environment_source())
    }

    fn load_with(env: &str, environment: config::Environment) -> Result<Self, AppError> {
        let config: Self = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject a production deployment that still uses placeholder credentials.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.env != "production" {
            return Ok(());
        }
        let placeholders = self.auth.placeholder_credentials();
        if placeholders.is_empty() {
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "placeholder credentials must be replaced in production: {}",
                placeholders.join(", ")
            )))
        }
    }
}

fn environment_source() -> config::Environment {
    LIST_KEYS.into_iter().fold(
        config::Environment::with_prefix("USERHUB")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |environment, key| environment.with_list_parse_key(key),
    )
}
