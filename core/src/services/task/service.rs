//! Task service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskStatus, TaskView};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TaskRepository;

/// Creates, lists, updates and deletes tasks
pub struct TaskService<T>
where
    T: TaskRepository,
{
    repository: Arc<T>,
}

impl<T> TaskService<T>
where
    T: TaskRepository,
{
    pub fn new(repository: Arc<T>) -> Self {
        Self { repository }
    }

    /// Create a pending task owned by `created_by`
    pub async fn create(
        &self,
        created_by: Uuid,
        title: &str,
        description: Option<String>,
    ) -> DomainResult<TaskView> {
        let task = Task::new(title, description, created_by)?;
        let view = self.repository.create(task).await?;
        tracing::info!(task_id = %view.id, created_by = %created_by, "Task created");
        Ok(view)
    }

    /// Tasks newest first, optionally only those in `status`
    pub async fn list(&self, status: Option<TaskStatus>) -> DomainResult<Vec<TaskView>> {
        self.repository.list(status).await
    }

    /// Move a task to `status`. Title, description and creator are untouched.
    pub async fn update_status(&self, id: Uuid, status: TaskStatus) -> DomainResult<TaskView> {
        let view = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!(task_id = %id, status = %status, "Task status updated");
        Ok(view)
    }

    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound {
        resource: "Task".to_string(),
    }
}
