//! Unit tests for rental service

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::entities::rental::NewRental;
use crate::domain::entities::user::{User, DEFAULT_USER_COLOR};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{MockRentalRepository, MockUserRepository, RentalRepository, UserRepository};
use crate::services::rental::RentalService;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

struct Fixture {
    service: RentalService<MockRentalRepository>,
    repository: Arc<MockRentalRepository>,
    a: User,
    b: User,
}

async fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let a = users
        .create(User::new("a", "hash", DEFAULT_USER_COLOR))
        .await
        .unwrap();
    let b = users
        .create(User::new("b", "hash", DEFAULT_USER_COLOR))
        .await
        .unwrap();
    let repository = Arc::new(MockRentalRepository::new(users));
    Fixture {
        service: RentalService::new(repository.clone()),
        repository,
        a,
        b,
    }
}

#[tokio::test]
async fn test_one_rental_per_user_per_day() {
    let f = fixture().await;

    f.service
        .create(f.a.id, NewRental::for_date(day(1)))
        .await
        .unwrap();

    let second = f.service.create(f.a.id, NewRental::for_date(day(1))).await;
    assert!(matches!(second, Err(DomainError::Conflict { .. })));

    let other_user = f
        .service
        .create(f.b.id, NewRental::for_date(day(1)))
        .await
        .unwrap();
    assert_eq!(other_user.username, "b");
}

#[tokio::test]
async fn test_invalid_hours_never_reach_store() {
    let f = fixture().await;

    let request = NewRental {
        date: day(3),
        start_hour: Some(18),
        end_hour: Some(9),
        notes: None,
    };
    let result = f.service.create(f.a.id, request).await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidHourRange { start: 18, end: 9 }))
    ));
    assert!(f.repository.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_defaults_and_notes() {
    let f = fixture().await;

    let view = f
        .service
        .create(
            f.a.id,
            NewRental {
                date: day(4),
                start_hour: None,
                end_hour: None,
                notes: Some("Llevar leña".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!((view.start_hour, view.end_hour), (8, 20));
    assert_eq!(view.notes.as_deref(), Some("Llevar leña"));
}

#[tokio::test]
async fn test_range_needs_both_ends() {
    let f = fixture().await;
    for d in [1, 15, 30] {
        f.service
            .create(f.a.id, NewRental::for_date(day(d)))
            .await
            .unwrap();
    }

    let only_start = f.service.list_between(Some(day(10)), None).await.unwrap();
    assert_eq!(only_start.len(), 3);

    let both = f
        .service
        .list_between(Some(day(10)), Some(day(20)))
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].day(), day(15));
}

#[tokio::test]
async fn test_delete_own_rental() {
    let f = fixture().await;
    f.service
        .create(f.a.id, NewRental::for_date(day(1)))
        .await
        .unwrap();

    assert_eq!(f.service.delete(f.b.id, day(1)).await.unwrap(), 0);
    assert_eq!(f.service.delete(f.a.id, day(1)).await.unwrap(), 1);

    // The day is free again.
    assert!(f
        .service
        .create(f.a.id, NewRental::for_date(day(1)))
        .await
        .is_ok());
}
