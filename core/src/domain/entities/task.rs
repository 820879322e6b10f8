//! Task entity for the shared to-do list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::PublicUser;
use crate::errors::ValidationError;

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Task status. Transitions freely in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "PENDING", alias = "PENDIENTE")]
    Pending,
    #[serde(rename = "DONE", alias = "COMPLETADA")]
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::Done => "DONE",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" | "PENDIENTE" => Ok(TaskStatus::Pending),
            "DONE" | "COMPLETADA" => Ok(TaskStatus::Done),
            _ => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
            }),
        }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_by_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task after checking title and description lengths
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        created_by_id: Uuid,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            });
        }
        check_length("title", &title, TITLE_MAX_LEN)?;

        let description = description.filter(|d| !d.trim().is_empty());
        if let Some(description) = &description {
            check_length("description", description, DESCRIPTION_MAX_LEN)?;
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Pending,
            created_by_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Changes the status; nothing else is touched
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Task joined with its creator, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_by_id: Uuid,
    pub created_by: PublicUser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskView {
    pub fn new(task: Task, created_by: PublicUser) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_by_id: task.created_by_id,
            created_by,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}
