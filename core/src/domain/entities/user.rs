//! User entity representing an account that can book days and create tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public projection of a user returned to clients
pub use ag_shared::types::UserSummary as PublicUser;

/// Color given to accounts that were never assigned one from the palette
pub const DEFAULT_USER_COLOR: &str = "#2E6B3A";

/// User entity
///
/// Accounts are created by the admin CLI and never deleted in normal
/// operation. Only the color and the password hash change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique across accounts
    pub username: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display color (hex, e.g. `#C96E2D`)
    pub color: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            color: color.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the display color
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.updated_at = Utc::now();
    }

    /// Whether the account still carries the default color
    pub fn has_default_color(&self) -> bool {
        self.color == DEFAULT_USER_COLOR
    }

    /// Projection safe to send to clients (no password hash)
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            color: self.color.clone(),
        }
    }
}
