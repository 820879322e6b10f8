//! User administration service implementation

use std::sync::Arc;

use crate::domain::entities::user::{User, DEFAULT_USER_COLOR};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::auth::{hash_password_with_cost, BCRYPT_COST};

use super::palette::pick_color;

/// Account management used by the admin CLI
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
    hash_cost: u32,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self {
            user_repository,
            hash_cost: BCRYPT_COST,
        }
    }

    /// Override the bcrypt cost (tests use the minimum)
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Create an account with a palette color no other account uses yet
    ///
    /// The default color is skipped while other colors remain.
    ///
    /// # Errors
    ///
    /// * `ValidationError::RequiredField` - Empty username or password
    /// * `DomainError::Conflict` - Username already taken
    pub async fn create_user(&self, username: &str, password: &str) -> DomainResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }

        let password_hash = hash_password_with_cost(password, self.hash_cost).await?;
        let mut in_use: Vec<String> = self
            .user_repository
            .list()
            .await?
            .into_iter()
            .map(|u| u.color)
            .collect();
        in_use.push(DEFAULT_USER_COLOR.to_string());

        let user = User::new(username, password_hash, pick_color(&in_use));
        let user = self.user_repository.create(user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, color = %user.color, "User created");
        Ok(user)
    }

    /// Replace a user's password
    pub async fn change_password(&self, username: &str, new_password: &str) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("User {}", username),
            })?;

        let password_hash = hash_password_with_cost(new_password, self.hash_cost).await?;
        user.set_password_hash(password_hash);

        let user = self.user_repository.update(user).await?;
        tracing::info!(user_id = %user.id, "Password changed");
        Ok(user)
    }

    /// Give every user still on the default color a palette color not yet taken
    ///
    /// Returns the users that were updated.
    pub async fn assign_colors(&self) -> DomainResult<Vec<User>> {
        let users = self.user_repository.list().await?;
        let mut in_use: Vec<String> = users.iter().map(|u| u.color.clone()).collect();

        let pending: Vec<User> = users.into_iter().filter(User::has_default_color).collect();
        if pending.is_empty() {
            tracing::info!("All users already have a color assigned");
            return Ok(Vec::new());
        }

        let mut updated = Vec::with_capacity(pending.len());
        for mut user in pending {
            let color = pick_color(&in_use);
            in_use.push(color.clone());
            user.set_color(color);

            let user = self.user_repository.update(user).await?;
            tracing::info!(username = %user.username, color = %user.color, "Color assigned");
            updated.push(user);
        }

        Ok(updated)
    }
}
