//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Kind of token. Each kind is signed with its own secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim set carried inside a signed token
///
/// Serialized as `{"userId", "username", "type", "iat", "exp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    pub username: String,

    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenPayload {
    /// Creates claims for `user` valid for `ttl` from now
    ///
    /// # Arguments
    ///
    /// * `user` - The token owner
    /// * `token_type` - Access or refresh
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    ///
    /// A new `TokenPayload` ready to be signed
    pub fn new(user: &User, token_type: TokenType, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            user_id: user.id,
            username: user.username.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

}

/// Token pair produced at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    /// Short-lived token returned in the response body
    pub access_token: String,

    /// Long-lived token delivered only as an http-only cookie
    pub refresh_token: String,
}
