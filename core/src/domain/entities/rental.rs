//! Rental entity: one user's booking of a calendar day.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Start hour applied when the request omits it
pub const DEFAULT_START_HOUR: u8 = 8;

/// End hour applied when the request omits it
pub const DEFAULT_END_HOUR: u8 = 20;

/// Highest accepted hour value
pub const MAX_HOUR: u8 = 23;

/// A booked day
///
/// At most one rental exists per `(date, user_id)`; the store enforces it
/// with a unique index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub id: Uuid,

    /// Booked day, UTC
    pub date: NaiveDate,

    pub user_id: Uuid,

    pub start_hour: u8,

    pub end_hour: u8,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Rental {
    /// Creates a rental after checking the hour range
    pub fn new(
        date: NaiveDate,
        user_id: Uuid,
        start_hour: u8,
        end_hour: u8,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_hours(start_hour, end_hour)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            user_id,
            start_hour,
            end_hour,
            notes,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Creation request with the optional fields still unresolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRental {
    pub date: NaiveDate,
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
    pub notes: Option<String>,
}

impl NewRental {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            ..Default::default()
        }
    }

    /// Hours with defaults applied
    pub fn hours(&self) -> (u8, u8) {
        (
            self.start_hour.unwrap_or(DEFAULT_START_HOUR),
            self.end_hour.unwrap_or(DEFAULT_END_HOUR),
        )
    }

    /// Builds the entity for `user_id`, applying defaults and validating hours
    pub fn into_rental(self, user_id: Uuid) -> Result<Rental, ValidationError> {
        let (start_hour, end_hour) = self.hours();
        let notes = self.notes.filter(|n| !n.trim().is_empty());
        Rental::new(self.date, user_id, start_hour, end_hour, notes)
    }
}

/// Rental joined with its owner's username, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalView {
    pub id: Uuid,
    /// Midnight UTC of the booked day
    pub date: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
    pub start_hour: u8,
    pub end_hour: u8,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RentalView {
    pub fn new(rental: Rental, username: impl Into<String>) -> Self {
        Self {
            id: rental.id,
            date: day_start(rental.date),
            user_id: rental.user_id,
            username: username.into(),
            start_hour: rental.start_hour,
            end_hour: rental.end_hour,
            notes: rental.notes,
            created_at: rental.created_at,
            updated_at: rental.updated_at,
        }
    }

    /// The booked day
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Checks `start < end` with both in `[0, 23]`
pub fn validate_hours(start_hour: u8, end_hour: u8) -> Result<(), ValidationError> {
    for (field, value) in [("startHour", start_hour), ("endHour", end_hour)] {
        if value > MAX_HOUR {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                min: "0".to_string(),
                max: MAX_HOUR.to_string(),
            });
        }
    }

    if start_hour >= end_hour {
        return Err(ValidationError::InvalidHourRange {
            start: start_hour,
            end: end_hour,
        });
    }

    Ok(())
}

/// Parses a day from an RFC 3339 datetime or a plain `YYYY-MM-DD`.
///
/// Datetimes are converted to UTC before the time of day is dropped.
pub fn parse_rental_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc).date_naive());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
