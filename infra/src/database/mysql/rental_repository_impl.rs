//! MySQL implementation of the RentalRepository trait.
//!
//! Reads join `users` so every row carries the owner's username. The
//! `(date, user_id)` unique index turns a second booking of the same day
//! into a conflict.

use ag_core::domain::entities::rental::{Rental, RentalView};
use ag_core::errors::DomainError;
use ag_core::repositories::RentalRepository;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::MySqlPool;
use uuid::Uuid;

use super::{column, is_unique_violation, query_failed, uuid_column};

const RENTAL_SELECT: &str = r#"
    SELECT r.id, r.date, r.user_id, u.username, r.start_hour, r.end_hour,
           r.notes, r.created_at, r.updated_at
    FROM rentals r
    INNER JOIN users u ON u.id = r.user_id
"#;

/// MySQL implementation of RentalRepository
pub struct MySqlRentalRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRentalRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_view(row: &sqlx::mysql::MySqlRow) -> Result<RentalView, DomainError> {
        let date: NaiveDate = column(row, "date")?;

        Ok(RentalView {
            id: uuid_column(row, "id")?,
            date: Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
            user_id: uuid_column(row, "user_id")?,
            username: column(row, "username")?,
            start_hour: column(row, "start_hour")?,
            end_hour: column(row, "end_hour")?,
            notes: column(row, "notes")?,
            created_at: column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl RentalRepository for MySqlRentalRepository {
    async fn list(
        &self,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<RentalView>, DomainError> {
        let rows = match range {
            Some((start, end)) => {
                let query = format!(
                    "{} WHERE r.date BETWEEN ? AND ? ORDER BY r.date ASC, u.username ASC",
                    RENTAL_SELECT
                );
                sqlx::query(&query)
                    .bind(start)
                    .bind(end)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} ORDER BY r.date ASC, u.username ASC", RENTAL_SELECT);
                sqlx::query(&query).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| query_failed("Failed to list rentals", e))?;

        rows.iter().map(Self::row_to_view).collect()
    }

    async fn create(&self, rental: Rental) -> Result<RentalView, DomainError> {
        let query = r#"
            INSERT INTO rentals (id, date, user_id, start_hour, end_hour, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(rental.id.to_string())
            .bind(rental.date)
            .bind(rental.user_id.to_string())
            .bind(rental.start_hour)
            .bind(rental.end_hour)
            .bind(&rental.notes)
            .bind(rental.created_at)
            .bind(rental.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(DomainError::Conflict {
                    message: format!("Rental already exists for {}", rental.date),
                });
            }
            Err(e) => return Err(query_failed("Failed to create rental", e)),
        }

        self.find_by_date_and_user(rental.date, rental.user_id)
            .await?
            .ok_or_else(|| DomainError::internal("Rental missing after insert"))
    }

    async fn delete(&self, date: NaiveDate, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM rentals WHERE date = ? AND user_id = ?")
            .bind(date)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to delete rental", e))?;

        Ok(result.rows_affected())
    }

    async fn find_by_date_and_user(
        &self,
        date: NaiveDate,
        user_id: Uuid,
    ) -> Result<Option<RentalView>, DomainError> {
        let query = format!("{} WHERE r.date = ? AND r.user_id = ? LIMIT 1", RENTAL_SELECT);

        let row = sqlx::query(&query)
            .bind(date)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to find rental", e))?;

        row.as_ref().map(Self::row_to_view).transpose()
    }
}
