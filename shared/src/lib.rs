//! Shared utilities and common types for the Agenda server and client
//!
//! This crate provides functionality used across all workspace members:
//! - Configuration types loaded once at process start
//! - Error response body returned by every failing endpoint
//! - Wire types exchanged between the HTTP API and the session client
//! - Language detection for localized messages

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig,
    RefreshCookieConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{AuthResponse, Language, UserSummary};
