//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token secrets, token lifetimes and the refresh cookie
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server binding
//!
//! Everything is read from the process environment exactly once, in `main`,
//! and then handed to the components that need it.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig, RefreshCookieConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Fatal configuration problems detected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when a required value (the two token secrets) is missing or a
    /// numeric value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env(environment)?,
        })
    }
}

/// Read an optional numeric variable, falling back to `default` when unset
pub(crate) fn parse_var<T: std::str::FromStr>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}
