//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for
//! PostgreSQL using SQLx.

use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the PostgreSQL connection pool
pub type DatabasePool = PgPool;

/// Default wait for a pooled connection
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Connection string used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str =
    "postgres://postgres:password@db:5432/postgres?sslmode=disable";

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use roster_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("postgres://localhost/roster")
///     .max_connections(2)
///     .acquire_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_connections, 2);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// How long an operation waits for a connection before failing
    pub acquire_timeout: Duration,
    /// Idle timeout before closing a connection
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// The seeder runs its statements one after another, so the pool defaults
    /// to a single connection.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 1,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets how long to wait for a connection (default: 3s)
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Sets the idle timeout before closing a connection (default: 10 min)
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Creates a database connection pool and opens its first connection
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the database cannot be reached
///
/// # Example
///
/// ```rust,ignore
/// use roster_db::{DatabaseConfig, create_pool};
///
/// let pool = create_pool(DatabaseConfig::new("postgres://localhost/roster")).await?;
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(max_connections = config.max_connections, "Creating database pool");

    let pool = config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}

/// Creates a pool without connecting
///
/// Connections are opened on first use, so an unreachable database shows up
/// as an error on each individual query rather than here. Only a malformed
/// connection string fails.
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if `config.url` cannot be parsed
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(max_connections = config.max_connections, "Creating lazy database pool");

    config
        .pool_options()
        .connect_lazy(&config.url)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
}

/// Opens and closes one connection outside the pool
///
/// A pool retries refused connections until its acquire timeout and then
/// reports only the timeout. Connecting directly fails at once with the
/// driver's own error.
///
/// # Errors
///
/// Returns the classified connect error, e.g. `DatabaseError::ConnectionFailed`
pub async fn check_connection(pool: &DatabasePool) -> Result<(), DatabaseError> {
    let options = pool.connect_options();
    let conn = PgConnection::connect_with(&options).await?;
    conn.close().await?;
    Ok(())
}
