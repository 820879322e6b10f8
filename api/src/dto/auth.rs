use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

/// Body of `GET /api/protected`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: ProtectedUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedUser {
    pub user_id: uuid::Uuid,
    pub username: String,
}
