//! UserHub Server: user registration, login and permission-gated lookup.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use userhub_api::{AppState, FixedWindowLimiter, build_app};
use userhub_auth::password::PasswordHasher;
use userhub_cache::CacheManager;
use userhub_core::config::AppConfig;
use userhub_core::error::AppError;
use userhub_database::store::{PermissionStore, UserStore};
use userhub_database::{DatabasePool, migration};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, cause = e.cause_chain().as_deref().unwrap_or("-"), "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("USERHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %config.server.env,
        "Starting UserHub"
    );

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    let users: Arc<dyn UserStore> = Arc::new(db.users());
    let permissions: Arc<dyn PermissionStore> = Arc::new(db.permissions());

    // ── Step 2: Cache ────────────────────────────────────────────
    let cache = if config.cache.enabled {
        tracing::info!(provider = %config.cache.provider, "Initializing cache");
        Some(CacheManager::new(&config.cache).await?)
    } else {
        tracing::info!("Cache disabled; identity lookups read the store directly");
        None
    };

    // ── Step 3: Application state ────────────────────────────────
    let state = AppState::new(
        config.clone(),
        users,
        permissions,
        cache,
        PasswordHasher::new(),
    );

    // ── Step 4: Shutdown channel & limiter housekeeping ──────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let purge_handle = tokio::spawn(purge_rate_limiter(
        Arc::clone(&state.rate_limiter),
        shutdown_rx.clone(),
    ));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("UserHub server listening on {}", addr);

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    // ── Step 6: Graceful shutdown, bounded by the grace period ───
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let mut grace_rx = shutdown_rx.clone();
    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = grace_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed; dropping open connections");
        }
    }

    let _ = tokio::time::timeout(Duration::from_secs(1), purge_handle).await;
    db.close().await;

    tracing::info!("UserHub server shut down gracefully");
    Ok(())
}

/// Periodically drop ended rate-limit windows until shutdown.
async fn purge_rate_limiter(limiter: Arc<FixedWindowLimiter>, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(limiter.window().max(Duration::from_secs(1)));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let purged = limiter.purge_expired();
                if purged > 0 {
                    tracing::debug!(purged, remaining = limiter.tracked_keys(), "Purged rate-limit windows");
                }
            }
            _ = shutdown.changed() => break,
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
