// src/infrastructure/repositories/sqlite/connection.rs
use super::error::{SqliteRepositoryError, SqliteResult};
use super::schema::CREATE_BOOKMARKS_TABLE;
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel::{sql_query, Connection, RunQueryDsl};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

pub type ConnectionPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type PooledConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

const POOL_SIZE: u32 = 4;
const POOL_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize a connection pool.
///
/// The database file and the `bookmarks` table are created on first use;
/// opening an existing store leaves its content untouched.
pub fn init_pool(database_url: &str) -> SqliteResult<ConnectionPool> {
    debug!("Initializing connection pool for: {}", database_url);

    // Create parent directory if it doesn't exist
    if let Some(parent) = Path::new(database_url).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(SqliteRepositoryError::IoError)?;
        }
    }

    // Open once outside the pool: surfaces unusable paths immediately instead
    // of after the pool timeout
    let mut conn = SqliteConnection::establish(database_url)?;
    ensure_schema(&mut conn)?;

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(POOL_SIZE)
        .connection_timeout(POOL_TIMEOUT)
        .build(manager)
        .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))?;

    info!("Connection pool initialized successfully");
    Ok(pool)
}

/// Create the bookmarks table unless it exists
#[instrument(skip(conn), level = "debug")]
pub fn ensure_schema(conn: &mut SqliteConnection) -> SqliteResult<()> {
    sql_query(CREATE_BOOKMARKS_TABLE)
        .execute(conn)
        .map_err(|e| {
            SqliteRepositoryError::SchemaError(format!("Failed to create table bookmarks: {}", e))
        })?;
    Ok(())
}
