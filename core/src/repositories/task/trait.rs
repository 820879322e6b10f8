//! Task repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskStatus, TaskView};
use crate::errors::DomainError;

/// Persistence operations for the shared task list
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task and return it joined with its creator
    async fn create(&self, task: Task) -> Result<TaskView, DomainError>;

    /// List tasks, newest first, optionally filtered by status
    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<TaskView>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskView>, DomainError>;

    /// Change only `status` and `updated_at`
    ///
    /// # Returns
    /// * `Ok(Some(TaskView))` - The updated task
    /// * `Ok(None)` - No task with that id
    async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Option<TaskView>, DomainError>;

    /// Remove a task. `Ok(false)` when it did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
