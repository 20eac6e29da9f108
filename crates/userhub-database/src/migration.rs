//! Embedded schema migrations.

use sqlx::PgPool;
use tracing::info;

use userhub_core::error::{AppError, ErrorKind};

/// Apply the embedded migrations (schema plus role/permission seed data).
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(
        available = migrator.iter().count(),
        "Applying database migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
