//! Embedded schema migrations.

use crate::DbPool;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};
use wikiquiz_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};

/// Migrations compiled into the binary from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any pending migrations.
///
/// Runs on the blocking thread pool; safe to call on every startup.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &DbPool) -> DatabaseResult<()> {
    let pool = pool.clone();

    tokio::task::spawn_blocking(move || -> DatabaseResult<()> {
        let mut conn = pool.get()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

        for version in &applied {
            info!(%version, "Applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Migration(format!("Task join error: {}", e)))
    })?
}
