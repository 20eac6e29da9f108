//! Fixed-window rate limiter and its pipeline stage.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use dashmap::DashMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use userhub_core::error::AppError;
use userhub_service::RequestContext;

use crate::state::AppState;

/// Headers consulted for the client address, most specific first.
const CLIENT_IP_HEADERS: [&str; 3] = ["true-client-ip", "x-real-ip", "x-forwarded-for"];

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    start: Instant,
}

/// Per-key fixed-window counter.
///
/// Each key owns a `(count, start)` pair. Updates to one key are exclusive
/// (the map shard is locked for the duration of `allow`); different keys
/// proceed independently.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    windows: DashMap<String, Window>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Creates a limiter allowing `limit` requests per `window` per key.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            limit,
            window,
        }
    }

    /// Count a request for `key`.
    ///
    /// Returns `Err(retry_after)` when the key has exhausted its window.
    pub fn allow(&self, key: &str) -> Result<(), Duration> {
        let now = Instant::now();
        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            start: now,
        });

        let elapsed = now.duration_since(entry.start);
        if entry.count == 0 || elapsed >= self.window {
            entry.count = 1;
            entry.start = now;
            return Ok(());
        }

        entry.count = entry.count.saturating_add(1);
        if entry.count <= self.limit {
            Ok(())
        } else {
            Err(self.window - elapsed)
        }
    }

    /// Drop every window that has already ended.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.windows.len();
        self.windows
            .retain(|_, w| now.duration_since(w.start) < self.window);
        before - self.windows.len()
    }

    /// Number of tracked keys.
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Pipeline entry: seeds an anonymous [`RequestContext`] and applies the
/// limiter when enabled.
pub async fn rate_limit(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    request.extensions_mut().insert(RequestContext::anonymous());

    if state.config.rate_limiter.enabled {
        let peer = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        let key = client_key(request.headers(), peer);

        if let Err(retry_after) = state.rate_limiter.allow(&key) {
            warn!(
                client = %key,
                retry_after_ms = retry_after.as_millis() as u64,
                "Rate limit exceeded"
            );
            return Err(AppError::rate_limited(retry_after));
        }
        debug!(client = %key, "Rate limit check passed");
    }

    Ok(next.run(request).await)
}

/// Client identity for rate limiting: a proxy-supplied address if present,
/// otherwise the peer IP.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    for name in CLIENT_IP_HEADERS {
        let value = headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(ip) = value {
            return ip.to_string();
        }
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
