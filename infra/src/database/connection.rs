//! Database connection pool management
//!
//! This module provides PostgreSQL connection pooling using SQLx. The pool
//! connects lazily, so the service starts even when the database is not yet
//! reachable; connectivity is verified by [`DatabasePool::health_check`].

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use log::LevelFilter;

use ge_shared::config::DatabaseConfig;

use super::error::DatabaseError;

/// Database connection pool wrapper
#[derive(Clone, Debug)]
pub struct DatabasePool {
    /// SQLx PostgreSQL connection pool
    pool: PgPool,
}

impl DatabasePool {
    /// Create a lazily connecting pool from configuration
    ///
    /// # Errors
    /// * [`DatabaseError::NotConfigured`] when no URL is set
    /// * [`DatabaseError::InvalidUrl`] when the URL cannot be parsed
    ///
    /// Must be called from within a Tokio runtime; the pool spawns its
    /// maintenance tasks on creation.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(DatabaseError::NotConfigured)?;

        let connect_options = PgConnectOptions::from_str(url)
            .map_err(|e| DatabaseError::InvalidUrl(e.to_string()))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

        tracing::info!(
            "Creating database connection pool with max_connections: {}",
            config.max_connections
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_lazy_with(connect_options);

        Ok(Self { pool })
    }

    /// Check that the database answers a trivial query
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        tracing::debug!("Performing database health check");

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Database health check failed: {}", e);
                DatabaseError::Query(e)
            })?;

        tracing::debug!("Database health check passed");
        Ok(())
    }

    /// Get connection pool statistics
    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Close all connections in the pool
    ///
    /// This should be called during application shutdown.
    pub async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

/// Connection pool statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
