//! In-memory implementation of RentalRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rental::{Rental, RentalView};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::RentalRepository;

/// Mock rental repository
///
/// Shares a [`MockUserRepository`] to resolve usernames, the way the SQL
/// implementation joins the users table.
pub struct MockRentalRepository {
    rentals: Arc<RwLock<Vec<Rental>>>,
    users: Arc<MockUserRepository>,
}

impl MockRentalRepository {
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            rentals: Arc::new(RwLock::new(Vec::new())),
            users,
        }
    }

    async fn to_view(&self, rental: Rental) -> Result<RentalView, DomainError> {
        let user = self
            .users
            .find_by_id(rental.user_id)
            .await?
            .ok_or_else(|| DomainError::internal("Rental references an unknown user"))?;
        Ok(RentalView::new(rental, user.username))
    }
}

#[async_trait]
impl RentalRepository for MockRentalRepository {
    async fn list(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<RentalView>, DomainError> {
        let mut selected: Vec<Rental> = {
            let rentals = self.rentals.read().await;
            rentals
                .iter()
                .filter(|r| match range {
                    Some((start, end)) => r.date >= start && r.date <= end,
                    None => true,
                })
                .cloned()
                .collect()
        };
        selected.sort_by_key(|r| r.date);

        let mut views = Vec::with_capacity(selected.len());
        for rental in selected {
            views.push(self.to_view(rental).await?);
        }
        Ok(views)
    }

    async fn create(&self, rental: Rental) -> Result<RentalView, DomainError> {
        let view = self.to_view(rental.clone()).await?;
        {
            let mut rentals = self.rentals.write().await;

            if rentals
                .iter()
                .any(|r| r.date == rental.date && r.user_id == rental.user_id)
            {
                return Err(DomainError::Conflict {
                    message: format!("Rental already exists for {}", rental.date),
                });
            }

            rentals.push(rental);
        }

        Ok(view)
    }

    async fn delete(&self, date: NaiveDate, user_id: Uuid) -> Result<u64, DomainError> {
        let mut rentals = self.rentals.write().await;
        let before = rentals.len();
        rentals.retain(|r| !(r.date == date && r.user_id == user_id));
        Ok((before - rentals.len()) as u64)
    }

    async fn find_by_date_and_user(
        &self,
        date: NaiveDate,
        user_id: Uuid,
    ) -> Result<Option<RentalView>, DomainError> {
        let found = {
            let rentals = self.rentals.read().await;
            rentals
                .iter()
                .find(|r| r.date == date && r.user_id == user_id)
                .cloned()
        };

        match found {
            Some(rental) => Ok(Some(self.to_view(rental).await?)),
            None => Ok(None),
        }
    }
}
