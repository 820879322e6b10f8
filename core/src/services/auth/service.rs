//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::{AuthTokens, TokenType};
use crate::domain::entities::user::PublicUser;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::{verify_dummy, verify_password};

/// Successful login
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: PublicUser,
    pub tokens: AuthTokens,
}

/// Successful access token renewal
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub user: PublicUser,
    pub access_token: String,
}

/// Authentication service: credential checks and token issuance
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user lookups
    /// * `token_service` - Service for JWT token management
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Token service used by this instance
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Check a username and password
    ///
    /// Unknown usernames and wrong passwords both yield `Ok(None)`, after the
    /// same amount of bcrypt work, so the caller cannot tell them apart.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(AuthOutcome))` - Public user projection plus a fresh token pair
    /// * `Ok(None)` - Credentials rejected
    /// * `Err(DomainError)` - Storage or signing failure
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> DomainResult<Option<AuthOutcome>> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                verify_dummy(password).await?;
                tracing::info!(username = %username, "Login rejected");
                return Ok(None);
            }
        };

        if !verify_password(password, &user.password_hash).await? {
            tracing::info!(username = %username, "Login rejected");
            return Ok(None);
        }

        let tokens = self.token_service.issue_tokens(&user)?;
        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(Some(AuthOutcome {
            user: user.to_public(),
            tokens,
        }))
    }

    /// Mint a new access token from a refresh token
    ///
    /// The refresh token itself is not rotated.
    ///
    /// # Errors
    ///
    /// * `AuthError::SessionExpired` - Correctly signed refresh token past its `exp`
    /// * `AuthError::InvalidRefreshToken` - Bad signature, malformed, or not a refresh token
    /// * `AuthError::UserNotFound` - The token's user no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<RefreshOutcome> {
        let payload = self
            .token_service
            .verify(refresh_token, TokenType::Refresh)
            .map_err(|e| match e {
                TokenError::Expired => AuthError::SessionExpired,
                _ => AuthError::InvalidRefreshToken,
            })?;

        let user = self
            .user_repository
            .find_by_id(payload.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let access_token = self.token_service.issue_access_token(&user)?;
        tracing::debug!(user_id = %user.id, "Access token refreshed");

        Ok(RefreshOutcome {
            user: user.to_public(),
            access_token,
        })
    }
}
