//! Unit tests for user administration

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::user::{User, DEFAULT_USER_COLOR};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::verify_password;
use crate::services::user::{pick_color, UserService, USER_COLORS};

fn service() -> (UserService<MockUserRepository>, Arc<MockUserRepository>) {
    let users = Arc::new(MockUserRepository::new());
    (UserService::new(users.clone()).with_hash_cost(4), users)
}

#[test]
fn test_pick_color_avoids_used() {
    let in_use: Vec<String> = USER_COLORS[1..].iter().map(|c| c.to_string()).collect();
    assert_eq!(pick_color(&in_use), DEFAULT_USER_COLOR);
}

#[test]
fn test_pick_color_when_palette_exhausted() {
    let in_use: Vec<String> = USER_COLORS.iter().map(|c| c.to_string()).collect();
    let color = pick_color(&in_use);
    assert!(USER_COLORS.contains(&color.as_str()));
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let (service, users) = service();

    let user = service.create_user("  admin ", "correct").await.unwrap();
    assert_eq!(user.username, "admin");
    assert_ne!(user.password_hash, "correct");
    assert!(verify_password("correct", &user.password_hash).await.unwrap());
    assert!(USER_COLORS.contains(&user.color.as_str()));
    assert!(!user.has_default_color());

    assert!(users.find_by_username("admin").await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_user_rejects_duplicates_and_blanks() {
    let (service, _) = service();

    service.create_user("ana", "pw").await.unwrap();
    assert!(matches!(
        service.create_user("ana", "pw2").await,
        Err(DomainError::Conflict { .. })
    ));
    assert!(matches!(
        service.create_user("   ", "pw").await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_change_password() {
    let (service, _) = service();
    service.create_user("ana", "old").await.unwrap();

    let user = service.change_password("ana", "new").await.unwrap();
    assert!(verify_password("new", &user.password_hash).await.unwrap());
    assert!(!verify_password("old", &user.password_hash).await.unwrap());

    assert!(matches!(
        service.change_password("ghost", "x").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_assign_colors_only_touches_default() {
    let (service, users) = service();
    for name in ["a", "b", "c"] {
        users
            .create(User::new(name, "hash", DEFAULT_USER_COLOR))
            .await
            .unwrap();
    }
    users
        .create(User::new("d", "hash", "#C96E2D"))
        .await
        .unwrap();

    let updated = service.assign_colors().await.unwrap();
    assert_eq!(updated.len(), 3);

    let colors: HashSet<String> = users
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.color)
        .collect();
    // Four users, four distinct colors, none left on the default.
    assert_eq!(colors.len(), 4);
    assert!(!colors.contains(DEFAULT_USER_COLOR));

    assert!(service.assign_colors().await.unwrap().is_empty());
}
