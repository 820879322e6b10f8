//! In-memory implementation of TaskRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskStatus, TaskView};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::TaskRepository;

/// Mock task repository backed by a map, resolving creators through a
/// shared [`MockUserRepository`]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
    users: Arc<MockUserRepository>,
}

impl MockTaskRepository {
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            users,
        }
    }

    async fn to_view(&self, task: Task) -> Result<TaskView, DomainError> {
        let creator = self
            .users
            .find_by_id(task.created_by_id)
            .await?
            .ok_or_else(|| DomainError::internal("Task references an unknown user"))?;
        Ok(TaskView::new(task, creator.to_public()))
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: Task) -> Result<TaskView, DomainError> {
        let view = self.to_view(task.clone()).await?;
        self.tasks.write().await.insert(task.id, task);
        Ok(view)
    }

    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<TaskView>, DomainError> {
        let mut selected: Vec<Task> = {
            let tasks = self.tasks.read().await;
            tasks
                .values()
                .filter(|t| status.map_or(true, |s| t.status == s))
                .cloned()
                .collect()
        };
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut views = Vec::with_capacity(selected.len());
        for task in selected {
            views.push(self.to_view(task).await?);
        }
        Ok(views)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskView>, DomainError> {
        let found = self.tasks.read().await.get(&id).cloned();
        match found {
            Some(task) => Ok(Some(self.to_view(task).await?)),
            None => Ok(None),
        }
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Option<TaskView>, DomainError> {
        let updated = {
            let mut tasks = self.tasks.write().await;
            match tasks.get_mut(&id) {
                Some(task) => {
                    task.set_status(status);
                    Some(task.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(task) => Ok(Some(self.to_view(task).await?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}
