//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - Access token issuance (short-lived, returned in response bodies)
//! - Refresh token issuance (long-lived, delivered as an http-only cookie)
//! - Verification against the expected token kind

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
