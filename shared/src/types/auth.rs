//! Authentication payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub color: String,
}

/// Body of the login and refresh responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    pub fn authenticated(access_token: impl Into<String>, user: UserSummary) -> Self {
        Self {
            success: true,
            access_token: Some(access_token.into()),
            user: Some(user),
            error: None,
        }
    }
}
