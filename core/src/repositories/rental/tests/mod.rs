//! Unit tests for mock rental repository

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::rental::NewRental;
use crate::domain::entities::user::{User, DEFAULT_USER_COLOR};
use crate::errors::DomainError;
use crate::repositories::rental::{MockRentalRepository, RentalRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

async fn setup() -> (MockRentalRepository, User, User) {
    let users = Arc::new(MockUserRepository::new());
    let ana = users
        .create(User::new("ana", "hash", DEFAULT_USER_COLOR))
        .await
        .unwrap();
    let luis = users
        .create(User::new("luis", "hash", DEFAULT_USER_COLOR))
        .await
        .unwrap();
    (MockRentalRepository::new(users), ana, luis)
}

#[tokio::test]
async fn test_unique_per_date_and_user() {
    let (repo, ana, luis) = setup().await;

    let first = NewRental::for_date(day(1)).into_rental(ana.id).unwrap();
    let view = repo.create(first).await.unwrap();
    assert_eq!(view.username, "ana");

    let again = NewRental::for_date(day(1)).into_rental(ana.id).unwrap();
    assert!(matches!(
        repo.create(again).await,
        Err(DomainError::Conflict { .. })
    ));

    let other_user = NewRental::for_date(day(1)).into_rental(luis.id).unwrap();
    assert!(repo.create(other_user).await.is_ok());
}

#[tokio::test]
async fn test_list_ordering_and_range() {
    let (repo, ana, luis) = setup().await;

    for (d, user) in [(10, &ana), (2, &luis), (5, &ana)] {
        let rental = NewRental::for_date(day(d)).into_rental(user.id).unwrap();
        repo.create(rental).await.unwrap();
    }

    let all: Vec<NaiveDate> = repo
        .list(None)
        .await
        .unwrap()
        .iter()
        .map(|v| v.day())
        .collect();
    assert_eq!(all, vec![day(2), day(5), day(10)]);

    let ranged = repo.list(Some((day(2), day(5)))).await.unwrap();
    assert_eq!(ranged.len(), 2);
    assert_eq!(ranged[1].username, "ana");
}

#[tokio::test]
async fn test_delete_only_touches_owner() {
    let (repo, ana, luis) = setup().await;

    for user in [&ana, &luis] {
        let rental = NewRental::for_date(day(1)).into_rental(user.id).unwrap();
        repo.create(rental).await.unwrap();
    }

    assert_eq!(repo.delete(day(1), ana.id).await.unwrap(), 1);
    assert_eq!(repo.delete(day(1), ana.id).await.unwrap(), 0);

    assert!(repo
        .find_by_date_and_user(day(1), luis.id)
        .await
        .unwrap()
        .is_some());
}
