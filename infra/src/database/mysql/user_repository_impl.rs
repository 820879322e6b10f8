//! MySQL implementation of the UserRepository trait.

use ag_core::domain::entities::user::User;
use ag_core::errors::DomainError;
use ag_core::repositories::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use super::{column, is_unique_violation, query_failed, uuid_column};

const USER_COLUMNS: &str = "id, username, password_hash, color, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            username: column(row, "username")?,
            password_hash: column(row, "password_hash")?,
            color: column(row, "color")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE username = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user by username", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, username, password_hash, color, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(&user.color)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                tracing::info!(user_id = %user.id, username = %user.username, "User created");
                Ok(user)
            }
            Err(e) if is_unique_violation(&e) => Err(DomainError::Conflict {
                message: format!("Username '{}' already exists", user.username),
            }),
            Err(e) => Err(query_failed("Failed to create user", e)),
        }
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                password_hash = ?,
                color = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.password_hash)
            .bind(&user.color)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            // MySQL reports 0 affected rows when nothing changed, so check existence
            if self.find_by_id(user.id).await?.is_none() {
                return Err(DomainError::NotFound {
                    resource: "User".to_string(),
                });
            }
        }

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY username ASC", USER_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list users", e))?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
