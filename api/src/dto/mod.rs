//! Request and response bodies of the HTTP API

pub mod auth;
pub mod rental;
pub mod task;

pub use auth::{LoginRequest, ProtectedResponse, ProtectedUser};
pub use rental::{
    CreateRentalRequest, DeleteRentalRequest, RentalResponse, RentalsQuery, RentalsResponse,
};
pub use task::{CreateTaskRequest, TaskResponse, TasksQuery, TasksResponse, UpdateTaskStatusRequest};

use serde::{Deserialize, Serialize};

/// `{ "success": true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
