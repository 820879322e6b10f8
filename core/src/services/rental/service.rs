//! Rental service implementation

use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rental::{NewRental, RentalView};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RentalRepository;

/// Lists, creates and removes rentals
pub struct RentalService<R>
where
    R: RentalRepository,
{
    repository: Arc<R>,
}

impl<R> RentalService<R>
where
    R: RentalRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Rentals ordered by date, optionally restricted to an inclusive range
    pub async fn list(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<Vec<RentalView>> {
        self.repository.list(range).await
    }

    /// Same as [`Self::list`], filtering only when both ends are present
    pub async fn list_between(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> DomainResult<Vec<RentalView>> {
        let range = match (start, end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        };
        self.list(range).await
    }

    /// Book a day for `user_id`
    ///
    /// Hours are validated before the store is touched. A second booking of
    /// the same day by the same user fails with `DomainError::Conflict`.
    pub async fn create(&self, user_id: Uuid, request: NewRental) -> DomainResult<RentalView> {
        let date = request.date;
        let rental = request.into_rental(user_id)?;

        match self.repository.create(rental).await {
            Ok(view) => {
                tracing::info!(user_id = %user_id, date = %date, "Rental created");
                Ok(view)
            }
            Err(e @ DomainError::Conflict { .. }) => {
                tracing::info!(user_id = %user_id, date = %date, "Rental already exists");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Remove the caller's rental for `date`; returns how many were removed
    pub async fn delete(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<u64> {
        let removed = self.repository.delete(date, user_id).await?;
        tracing::info!(user_id = %user_id, date = %date, removed, "Rental deleted");
        Ok(removed)
    }
}
