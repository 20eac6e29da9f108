//! Cache provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether user lookups go through the cache at all.
    #[serde(default)]
    pub enabled: bool,
    /// Cache provider type: `"memory"` or `"redis"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Default TTL for cached entries in seconds.
    #[serde(default = "default_ttl")]
    pub default_ttl_seconds: u64,
    /// Redis-specific cache configuration.
    #[serde(default)]
    pub redis: RedisCacheConfig,
    /// In-memory cache configuration.
    #[serde(default)]
    pub memory: MemoryCacheConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_provider(),
            default_ttl_seconds: default_ttl(),
            redis: RedisCacheConfig::default(),
            memory: MemoryCacheConfig::default(),
        }
    }
}

/// Redis cache backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    /// Redis connection URL, without credentials or database index.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Optional password.
    #[serde(default)]
    pub password: Option<String>,
    /// Logical database index.
    #[serde(default)]
    pub db: u32,
    /// Key prefix for all UserHub cache keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl RedisCacheConfig {
    /// Full connection URL with password and database index applied.
    pub fn connection_url(&self) -> String {
        let base = self.url.trim_end_matches('/');
        let base = match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => match base.split_once("://") {
                Some((scheme, rest)) => format!("{scheme}://:{password}@{rest}"),
                None => base.to_string(),
            },
            None => base.to_string(),
        };
        format!("{base}/{}", self.db)
    }
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            password: None,
            db: 0,
            key_prefix: default_key_prefix(),
        }
    }
}

/// In-memory cache backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries in the cache.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_provider() -> String {
    "redis".to_string()
}

fn default_ttl() -> u64 {
    60
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "userhub:".to_string()
}

fn default_max_capacity() -> u64 {
    10000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_url_without_password() {
        let config = RedisCacheConfig::default();
        assert_eq!(config.connection_url(), "redis://localhost:6379/0");
    }

    #[test]
    fn test_connection_url_with_password_and_db() {
        let config = RedisCacheConfig {
            password: Some("hunter2".into()),
            db: 3,
            ..RedisCacheConfig::default()
        };
        assert_eq!(config.connection_url(), "redis://:hunter2@localhost:6379/3");
    }
}
