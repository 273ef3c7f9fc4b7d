use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the store adapter
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owns the single process-wide connection pool.
///
/// Created once before the listener binds, handed to the router through
/// `AppState`, and closed after the server drains.
#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// Open the pool and ping it. A store that cannot answer `SELECT 1`
    /// is reported as `Unavailable`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?;

        // An in-memory database lives only as long as its connections,
        // so the pool pins exactly one open.
        let in_memory = config.url.contains(":memory:");
        let max_connections = if in_memory { 1 } else { config.max_connections.max(1) };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));
        if in_memory {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(DatabaseError::Unavailable)?;

        let manager = Self { pool };
        manager
            .health_check()
            .await
            .map_err(|e| match e {
                DatabaseError::Sqlx(err) => DatabaseError::Unavailable(err),
                other => other,
            })?;

        info!("Opened database pool ({} max connections)", max_connections);
        Ok(manager)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 8,
            connection_timeout: 5,
        }
    }

    #[tokio::test]
    async fn connects_to_in_memory_store() {
        let manager = DatabaseManager::connect(&memory_config()).await.unwrap();
        assert!(manager.health_check().await.is_ok());
        manager.close().await;
        assert!(manager.pool().is_closed());
    }

    #[tokio::test]
    async fn missing_database_file_is_unavailable() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent-dir/definitely/missing.db".to_string(),
            max_connections: 1,
            connection_timeout: 1,
        };
        let err = DatabaseManager::connect(&config).await.err().unwrap();
        assert!(matches!(err, DatabaseError::Unavailable(_)), "got {err:?}");
    }
}
