//! Rate limiter configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimiterConfig {
    /// Whether the limiter stage runs.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Requests allowed per client per window.
    #[serde(default = "default_requests")]
    pub requests_per_window: u32,
    /// Window length in seconds.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
}

impl RateLimiterConfig {
    /// Window length as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            requests_per_window: default_requests(),
            window_seconds: default_window(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_requests() -> u32 {
    20
}

fn default_window() -> u64 {
    5
}
