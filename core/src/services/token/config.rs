//! Configuration for the token service

use ag_shared::config::JwtConfig;
use chrono::Duration;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::errors::DomainError;

/// Configuration for the token service
///
/// Built once at startup and passed in explicitly; tests construct their own
/// with distinct secrets and lifetimes.
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,
    /// Secret used to sign refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
}

impl TokenServiceConfig {
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES),
            refresh_ttl: Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    /// Fails with `DomainError::Configuration` on a missing secret or a
    /// lifetime that is not positive or too large to represent
    fn try_from(jwt: &JwtConfig) -> Result<Self, Self::Error> {
        jwt.validate().map_err(|e| DomainError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self::new(jwt.access_secret.clone(), jwt.refresh_secret.clone())
            .with_access_ttl(ttl("JWT_ACCESS_TOKEN_EXPIRY", jwt.access_token_expiry)?)
            .with_refresh_ttl(ttl("JWT_REFRESH_TOKEN_EXPIRY", jwt.refresh_token_expiry)?))
    }
}

fn ttl(key: &str, secs: i64) -> Result<Duration, DomainError> {
    Duration::try_seconds(secs).ok_or_else(|| DomainError::Configuration {
        message: format!("{} out of range: {}", key, secs),
    })
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
