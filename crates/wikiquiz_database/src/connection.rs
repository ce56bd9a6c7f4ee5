//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use tracing::{info, instrument};
use wikiquiz_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};

/// Shared pool of PostgreSQL connections.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// A connection checked out of a [`DbPool`]; returned to the pool on drop.
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Build a connection pool for `database_url`.
///
/// One connection is checked out and released immediately so a bad URL or an
/// unreachable server fails here rather than on the first request.
///
/// # Errors
///
/// Returns a `Connection` error if the pool cannot be built or warmed up.
#[instrument(skip(database_url))]
pub fn create_pool(database_url: &str, max_size: u32) -> DatabaseResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(max_size).build(manager).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Connection(format!(
            "Failed to create connection pool: {}",
            e
        )))
    })?;

    {
        let _conn = pool.get()?;
    }

    info!(max_size, "Database pool ready");
    Ok(pool)
}
