use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::SuccessResponse;

use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};

use super::cleared_refresh_cookie;

/// Handler for POST /api/auth/logout
///
/// Always succeeds and expires the refresh cookie. Tokens are stateless,
/// so nothing is revoked server side.
pub async fn logout<U, R, T>(state: web::Data<AppState<U, R, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    HttpResponse::Ok()
        .cookie(cleared_refresh_cookie(&state.cookie))
        .json(SuccessResponse::ok())
}
