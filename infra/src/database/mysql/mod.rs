//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod rental_repository_impl;
pub mod task_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use rental_repository_impl::MySqlRentalRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use user_repository_impl::MySqlUserRepository;

use ag_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row};
use uuid::Uuid;

/// Read a column, mapping decode failures to an internal error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

/// Read a `CHAR(36)` column as a UUID
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::internal(format!("Invalid {}: {}", name, e)))
}

/// Map a query failure to an internal error, logging it
pub(crate) fn query_failed(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, error);
    DomainError::internal(format!("{}: {}", context, error))
}

/// Whether the error is a duplicate-key violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
