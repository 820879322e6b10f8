//! MySQL pool shared by the repositories
//!
//! Owns the embedded migrations so both binaries bring the schema up to date
//! the same way.

use ag_shared::config::DatabaseConfig;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    ConnectOptions, MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::InfrastructureError;

/// Statements slower than this are logged at `warn`
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Connect using `config`; fails fast on a malformed URL
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD);

        tracing::info!(
            max_connections = config.max_connections,
            "Connecting to MySQL"
        );

        let pool = pool_options(&config)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!("Could not open MySQL pool: {}", e);
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool, config })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.config.max_connections,
        }
    }

    pub async fn close(&self) {
        tracing::info!("Closing MySQL pool ({})", self.get_statistics());
        self.pool.close().await;
    }

    /// Apply `infra/migrations`, skipping the ones already recorded
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Schema is up to date");
        Ok(())
    }
}

fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .test_before_acquire(true)
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
