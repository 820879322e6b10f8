use ag_core::domain::entities::rental::{parse_rental_date, NewRental, RentalView};
use ag_core::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/rentals`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    /// RFC 3339 datetime or `YYYY-MM-DD`
    pub date: String,

    #[validate(range(max = 23))]
    pub start_hour: Option<u8>,

    #[validate(range(max = 23))]
    pub end_hour: Option<u8>,

    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

impl CreateRentalRequest {
    pub fn into_new_rental(self) -> Result<NewRental, ValidationError> {
        Ok(NewRental {
            date: parse_rental_date(&self.date)?,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            notes: self.notes,
        })
    }
}

/// Body of `DELETE /api/rentals`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRentalRequest {
    pub date: String,
}

impl DeleteRentalRequest {
    pub fn day(&self) -> Result<NaiveDate, ValidationError> {
        parse_rental_date(&self.date)
    }
}

/// Query of `GET /api/rentals`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl RentalsQuery {
    /// Parsed bounds; either may be absent
    pub fn bounds(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ValidationError> {
        let parse = |value: &Option<String>| value.as_deref().map(parse_rental_date).transpose();
        Ok((parse(&self.start_date)?, parse(&self.end_date)?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalsResponse {
    pub success: bool,
    pub rentals: Vec<RentalView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalResponse {
    pub success: bool,
    pub rental: RentalView,
}
