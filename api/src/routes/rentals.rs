//! Day booking endpoints. All require a bearer access token.

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use ag_core::errors::DomainError;
use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};
use ag_shared::error_codes;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{
    CreateRentalRequest, DeleteRentalRequest, RentalResponse, RentalsQuery, RentalsResponse,
    SuccessResponse,
};
use crate::handlers::{bad_request, error_response, handle_domain_error};
use crate::i18n::{detect_language, Message};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/rentals?startDate=&endDate=
///
/// The range filter applies only when both bounds are present.
///
/// ## Errors
/// - 400 Bad Request: A bound is not a date
pub async fn list_rentals<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    query: Result<web::Query<RentalsQuery>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let bounds = query
        .ok()
        .and_then(|query| query.bounds().ok());
    let Some((start, end)) = bounds else {
        return bad_request(Message::InvalidParameters, lang);
    };

    match state.rental_service.list_between(start, end).await {
        Ok(rentals) => HttpResponse::Ok().json(RentalsResponse {
            success: true,
            rentals,
        }),
        Err(error) => handle_domain_error(&error, lang),
    }
}

/// Handler for POST /api/rentals
///
/// # Request Body
///
/// ```json
/// { "date": "2024-06-01T00:00:00.000Z", "startHour": 8, "endHour": 20, "notes": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Bad date, hour outside 0..=23 or start not before end
/// - 409 Conflict: The caller already booked that day
pub async fn create_rental<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    auth: AuthContext,
    body: Result<web::Json<CreateRentalRequest>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let new_rental = match body {
        Ok(body) if body.validate().is_ok() => match body.into_inner().into_new_rental() {
            Ok(new_rental) => new_rental,
            Err(_) => return bad_request(Message::InvalidData, lang),
        },
        _ => return bad_request(Message::InvalidData, lang),
    };

    match state.rental_service.create(auth.user_id, new_rental).await {
        Ok(rental) => HttpResponse::Ok().json(RentalResponse {
            success: true,
            rental,
        }),
        Err(DomainError::Conflict { .. }) => error_response(
            StatusCode::CONFLICT,
            error_codes::RENTAL_CONFLICT,
            Message::RentalConflict,
            lang,
        ),
        Err(error) => handle_domain_error(&error, lang),
    }
}

/// Handler for DELETE /api/rentals
///
/// Removes the caller's booking for `{ "date": ... }`. Succeeds even when
/// there was nothing to remove.
pub async fn delete_rental<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    auth: AuthContext,
    body: Result<web::Json<DeleteRentalRequest>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let Some(date) = body.ok().and_then(|body| body.day().ok()) else {
        return bad_request(Message::InvalidData, lang);
    };

    match state.rental_service.delete(auth.user_id, date).await {
        Ok(_) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Err(error) => handle_domain_error(&error, lang),
    }
}
