//! Unit tests for task service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::task::TaskStatus;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockTaskRepository, MockUserRepository, UserRepository};
use crate::services::task::TaskService;

async fn fixture() -> (TaskService<MockTaskRepository>, User) {
    let users = Arc::new(MockUserRepository::new());
    let ana = users
        .create(User::new("ana", "hash", "#8FBC8F"))
        .await
        .unwrap();
    (
        TaskService::new(Arc::new(MockTaskRepository::new(users))),
        ana,
    )
}

#[tokio::test]
async fn test_status_round_trip_keeps_other_fields() {
    let (service, ana) = fixture().await;

    let created = service
        .create(ana.id, "Limpiar chimenea", Some("Antes del invierno".to_string()))
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Pending);

    let done = service
        .update_status(created.id, TaskStatus::Done)
        .await
        .unwrap();
    assert_eq!(done.status, TaskStatus::Done);

    let pending = service
        .update_status(created.id, TaskStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending.status, TaskStatus::Pending);

    assert_eq!(pending.title, created.title);
    assert_eq!(pending.description, created.description);
    assert_eq!(pending.created_by, created.created_by);
    assert_eq!(pending.created_at, created.created_at);
}

#[tokio::test]
async fn test_unknown_task_is_not_found() {
    let (service, _) = fixture().await;

    assert!(matches!(
        service.update_status(Uuid::new_v4(), TaskStatus::Done).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_create_validates_title() {
    let (service, ana) = fixture().await;

    let result = service.create(ana.id, "", None).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_delete_then_list() {
    let (service, ana) = fixture().await;

    let keep = service.create(ana.id, "keep", None).await.unwrap();
    let drop = service.create(ana.id, "drop", None).await.unwrap();
    service.delete(drop.id).await.unwrap();

    let remaining = service.list(None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(service.list(Some(TaskStatus::Done)).await.unwrap().is_empty());
}
