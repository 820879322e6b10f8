//! Authentication configuration: token secrets, lifetimes and refresh cookie

use super::{parse_var, ConfigError, Environment};

/// Access token lifetime (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECS: i64 = 15 * 60;

/// Refresh token lifetime (7 days)
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

/// Upper bound for either lifetime (one year)
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 365 * 24 * 60 * 60;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// JWT signing configuration.
///
/// Access and refresh tokens are signed with independent secrets so that
/// holding one key never allows forging the other kind of token.
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret for access tokens
    pub access_secret: String,

    /// Secret for refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Create a configuration with the default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_secs(mut self, secs: i64) -> Self {
        self.access_token_expiry = secs;
        self
    }

    /// Set refresh token expiry in seconds
    pub fn with_refresh_expiry_secs(mut self, secs: i64) -> Self {
        self.refresh_token_expiry = secs;
        self
    }

    /// Both secrets must be present and both lifetimes in `1..=MAX_TOKEN_EXPIRY_SECS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_ACCESS_SECRET"));
        }
        if self.refresh_secret.trim().is_empty() {
            return Err(ConfigError::Missing("JWT_REFRESH_SECRET"));
        }
        check_expiry("JWT_ACCESS_TOKEN_EXPIRY", self.access_token_expiry)?;
        check_expiry("JWT_REFRESH_TOKEN_EXPIRY", self.refresh_token_expiry)?;
        Ok(())
    }
}

fn check_expiry(key: &'static str, secs: i64) -> Result<(), ConfigError> {
    if (1..=MAX_TOKEN_EXPIRY_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value: secs.to_string(),
        })
    }
}

// Secrets stay out of debug output.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

/// Attributes of the refresh token cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshCookieConfig {
    pub name: String,
    /// Max-Age in seconds
    pub max_age: i64,
    pub http_only: bool,
    /// HTTPS only; enabled in production
    pub secure: bool,
    pub path: String,
}

impl RefreshCookieConfig {
    pub fn for_environment(env: Environment) -> Self {
        Self {
            name: REFRESH_COOKIE_NAME.to_string(),
            max_age: DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
            http_only: true,
            secure: env.is_production(),
            path: "/".to_string(),
        }
    }
}

impl Default for RefreshCookieConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub cookie: RefreshCookieConfig,
}

impl AuthConfig {
    pub fn new(jwt: JwtConfig, cookie: RefreshCookieConfig) -> Self {
        Self { jwt, cookie }
    }

    /// Create from environment variables.
    ///
    /// `JWT_ACCESS_SECRET` and `JWT_REFRESH_SECRET` are required.
    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let access_secret = std::env::var("JWT_ACCESS_SECRET").unwrap_or_default();
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET").unwrap_or_default();

        let jwt = JwtConfig::new(access_secret, refresh_secret)
            .with_access_expiry_secs(parse_var(
                "JWT_ACCESS_TOKEN_EXPIRY",
                DEFAULT_ACCESS_TOKEN_EXPIRY_SECS,
            )?)
            .with_refresh_expiry_secs(parse_var(
                "JWT_REFRESH_TOKEN_EXPIRY",
                DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
            )?);
        jwt.validate()?;

        let mut cookie = RefreshCookieConfig::for_environment(env);
        cookie.max_age = jwt.refresh_token_expiry;

        Ok(Self { jwt, cookie })
    }
}
