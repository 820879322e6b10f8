//! Unit tests for mock task repository

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::task::{Task, TaskStatus};
use crate::domain::entities::user::User;
use crate::repositories::task::{MockTaskRepository, TaskRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};

async fn setup() -> (MockTaskRepository, User) {
    let users = Arc::new(MockUserRepository::new());
    let ana = users
        .create(User::new("ana", "hash", "#C96E2D"))
        .await
        .unwrap();
    (MockTaskRepository::new(users), ana)
}

#[tokio::test]
async fn test_create_joins_creator() {
    let (repo, ana) = setup().await;

    let view = repo
        .create(Task::new("Comprar leña", None, ana.id).unwrap())
        .await
        .unwrap();

    assert_eq!(view.created_by.username, "ana");
    assert_eq!(view.created_by.color, "#C96E2D");
    assert_eq!(view.status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let (repo, ana) = setup().await;

    let first = repo
        .create(Task::new("one", None, ana.id).unwrap())
        .await
        .unwrap();
    repo.create(Task::new("two", None, ana.id).unwrap())
        .await
        .unwrap();
    repo.update_status(first.id, TaskStatus::Done).await.unwrap();

    assert_eq!(repo.list(None).await.unwrap().len(), 2);

    let done = repo.list(Some(TaskStatus::Done)).await.unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "one");
}

#[tokio::test]
async fn test_update_and_delete_missing() {
    let (repo, _) = setup().await;

    assert!(repo
        .update_status(Uuid::new_v4(), TaskStatus::Done)
        .await
        .unwrap()
        .is_none());
    assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_creator_must_exist() {
    let (repo, _) = setup().await;
    let orphan = Task::new("orphan", None, Uuid::new_v4()).unwrap();
    assert!(repo.create(orphan).await.is_err());
}
