//! Rental repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::rental::{Rental, RentalView};
use crate::errors::DomainError;

/// Persistence operations for rentals
///
/// Reads return [`RentalView`]s, i.e. rentals joined with the owner's
/// username.
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// List rentals ordered by date ascending
    ///
    /// # Arguments
    /// * `range` - Inclusive `(start, end)` day filter; `None` lists everything
    async fn list(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<RentalView>, DomainError>;

    /// Insert a rental
    ///
    /// # Returns
    /// * `Ok(RentalView)` - The stored rental
    /// * `Err(DomainError::Conflict)` - The user already has a rental that day
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, rental: Rental) -> Result<RentalView, DomainError>;

    /// Remove the user's rental for `date`, returning the number of rows removed
    async fn delete(&self, date: NaiveDate, user_id: Uuid) -> Result<u64, DomainError>;

    /// Look up a single rental by its natural key
    async fn find_by_date_and_user(
        &self,
        date: NaiveDate,
        user_id: Uuid,
    ) -> Result<Option<RentalView>, DomainError>;
}
