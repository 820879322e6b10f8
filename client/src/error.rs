use thiserror::Error;

/// Errors surfaced by [`crate::SessionClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Login rejected; carries the server's localized message
    #[error("Login failed: {0}")]
    LoginFailed(String),

    /// A 401 could not be recovered by refreshing the access token
    #[error("Session expired")]
    SessionExpired,

    #[error("No access token available")]
    NoAccessToken,

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
