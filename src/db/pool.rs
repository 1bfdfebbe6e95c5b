//! Database connection pool management.

use super::StoreError;
use crate::config::DatabaseConfig;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Opens a pool for the configured connection string.
    ///
    /// The database file is created if it does not exist and foreign key
    /// enforcement is switched on for every connection.
    ///
    /// # Arguments
    /// * `config` - Database section of the application configuration
    ///
    /// # Errors
    /// Returns [`StoreError::Connection`] if the database cannot be opened.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(StoreError::Connection)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;

        info!("Database connection pool established at {}", config.url);

        Ok(Self { pool })
    }

    /// Opens a private in-memory database.
    ///
    /// An in-memory SQLite database lives only as long as its connection, so
    /// the pool is pinned to a single connection that never expires.
    ///
    /// # Errors
    /// Returns [`StoreError::Connection`] if the database cannot be opened.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(StoreError::Connection)?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;

        debug!("In-memory database opened");

        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the teacher, student and association tables if missing.
    ///
    /// Safe to run against an initialized database: existing structures and
    /// rows are left untouched.
    ///
    /// # Errors
    /// Returns [`StoreError::Migration`] if the schema cannot be applied.
    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database schema initialized");
        Ok(())
    }

    /// Round-trips a trivial query to check the database is reachable.
    ///
    /// # Errors
    /// Returns an error if no connection can be acquired or the query fails.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
