//! Unit tests for mock user repository

use crate::domain::entities::user::{User, DEFAULT_USER_COLOR};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();
    let user = User::new("admin", "hash", DEFAULT_USER_COLOR);

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_eq!(by_id.unwrap().username, "admin");

    let by_name = repo.find_by_username("admin").await.unwrap();
    assert_eq!(by_name.unwrap().id, user.id);

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_username() {
    let repo = MockUserRepository::new();

    repo.create(User::new("ana", "h1", DEFAULT_USER_COLOR))
        .await
        .unwrap();
    let result = repo.create(User::new("ana", "h2", DEFAULT_USER_COLOR)).await;

    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_mock_repository_update() {
    let repo = MockUserRepository::new();
    let mut user = repo
        .create(User::new("ana", "hash", DEFAULT_USER_COLOR))
        .await
        .unwrap();

    user.set_color("#C96E2D");
    repo.update(user.clone()).await.unwrap();
    assert_eq!(
        repo.find_by_id(user.id).await.unwrap().unwrap().color,
        "#C96E2D"
    );

    let stranger = User::new("ghost", "hash", DEFAULT_USER_COLOR);
    assert!(matches!(
        repo.update(stranger).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_mock_repository_list_sorted() {
    let repo = MockUserRepository::new();
    for name in ["zoe", "ana", "luis"] {
        repo.create(User::new(name, "hash", DEFAULT_USER_COLOR))
            .await
            .unwrap();
    }

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    assert_eq!(names, vec!["ana", "luis", "zoe"]);
}
