//! Database connection and management module
//!
//! This module provides connection management, pooling, configuration, and
//! schema migration for the campus map datastore. The datastore is SQLite;
//! the default is an in-memory database so the service runs self-contained,
//! and `DATABASE_URL` selects a file-backed database instead.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, warn};

pub mod category_repository;
pub mod location_repository;

// Re-export repositories for convenience
pub use category_repository::CategoryRepository;
pub use location_repository::LocationRepository;

use crate::error::StoreError;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            max_connections: std::env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            connection_timeout: Duration::from_secs(30),
        }
    }
}

/// Database connection manager
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Create a new database manager with the given configuration
    pub async fn new(config: DatabaseConfig) -> Result<Self, StoreError> {
        info!("Connecting to database: {}", config.database_url);

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(StoreError::Database)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout);

        // An in-memory SQLite database lives and dies with its connection:
        // pin the pool to a single connection and never reap it.
        if is_in_memory(&config.database_url) {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            StoreError::Database(e)
        })?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create a new database manager with default configuration
    pub async fn with_default_config() -> Result<Self, StoreError> {
        let config = DatabaseConfig::default();
        Self::new(config).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a new category repository using this database connection
    pub fn category_repository(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Create a new location repository using this database connection
    pub fn location_repository(&self) -> LocationRepository {
        LocationRepository::new(self.pool.clone())
    }

    /// Create the schema if it does not exist yet
    pub async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT CHECK (description IS NULL OR length(description) <= 1000)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS locations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT CHECK (description IS NULL OR length(description) <= 1000),
                category_id INTEGER NOT NULL REFERENCES categories(id),
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        info!("Database schema ready");
        Ok(())
    }

    /// Test database connectivity
    pub async fn test_connection(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(StoreError::Database)
    }

    /// Close the database connection pool
    pub async fn close(self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
