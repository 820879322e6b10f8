//! MySQL implementation of the TaskRepository trait.

use ag_core::domain::entities::task::{Task, TaskStatus, TaskView};
use ag_core::domain::entities::user::PublicUser;
use ag_core::errors::DomainError;
use ag_core::repositories::TaskRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use super::{column, query_failed, uuid_column};

const TASK_SELECT: &str = r#"
    SELECT t.id, t.title, t.description, t.status, t.created_by_id,
           t.created_at, t.updated_at,
           u.username AS creator_username, u.color AS creator_color
    FROM tasks t
    INNER JOIN users u ON u.id = t.created_by_id
"#;

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_view(row: &sqlx::mysql::MySqlRow) -> Result<TaskView, DomainError> {
        let status: String = column(row, "status")?;
        let created_by_id = uuid_column(row, "created_by_id")?;

        Ok(TaskView {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            status: status
                .parse::<TaskStatus>()
                .map_err(|_| DomainError::internal(format!("Unknown task status: {}", status)))?,
            created_by_id,
            created_by: PublicUser {
                id: created_by_id,
                username: column(row, "creator_username")?,
                color: column(row, "creator_color")?,
            },
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn create(&self, task: Task) -> Result<TaskView, DomainError> {
        let query = r#"
            INSERT INTO tasks (id, title, description, status, created_by_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(task.id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status.as_str())
            .bind(task.created_by_id.to_string())
            .bind(task.created_at)
            .bind(task.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to create task", e))?;

        self.find_by_id(task.id)
            .await?
            .ok_or_else(|| DomainError::internal("Task missing after insert"))
    }

    async fn list(&self, status: Option<TaskStatus>) -> Result<Vec<TaskView>, DomainError> {
        let rows = match status {
            Some(status) => {
                let query = format!(
                    "{} WHERE t.status = ? ORDER BY t.created_at DESC",
                    TASK_SELECT
                );
                sqlx::query(&query)
                    .bind(status.as_str())
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} ORDER BY t.created_at DESC", TASK_SELECT);
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| query_failed("Failed to list tasks", e))?;

        rows.iter().map(Self::row_to_view).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TaskView>, DomainError> {
        let query = format!("{} WHERE t.id = ? LIMIT 1", TASK_SELECT);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find task", e))?;

        row.as_ref().map(Self::row_to_view).transpose()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Option<TaskView>, DomainError> {
        let result = sqlx::query("UPDATE tasks SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update task status", e))?;

        tracing::debug!(task_id = %id, rows = result.rows_affected(), "Task status updated");

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}
