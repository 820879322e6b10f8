use ag_core::domain::entities::task::TaskView;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Body of `PATCH /api/tasks`
///
/// Both fields are optional at the wire level so that a missing id and a
/// bad status can be reported separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaskStatusRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Query of `GET /api/tasks`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksResponse {
    pub success: bool,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse {
    pub success: bool,
    pub task: TaskView,
}
