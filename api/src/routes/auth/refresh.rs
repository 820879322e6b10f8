use actix_web::{web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::i18n::detect_language;

use ag_core::errors::{AuthError, DomainError};
use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};
use ag_shared::AuthResponse;

/// Handler for POST /api/auth/refresh
///
/// Mints a new access token from the `refresh_token` cookie. The cookie
/// itself is left untouched.
///
/// # Response
///
/// ## Success (200 OK)
/// `{ "success": true, "accessToken": "eyJ...", "user": { ... } }`
///
/// ## Errors
/// - 401 Unauthorized: Cookie missing, token invalid, expired, of the wrong
///   type, or its user no longer exists
/// - 500 Internal Server Error
pub async fn refresh<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let refresh_token = match req.cookie(&state.cookie.name) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
        _ => {
            return handle_domain_error(
                &DomainError::Auth(AuthError::MissingRefreshToken),
                lang,
            )
        }
    };

    match state.auth_service.refresh(&refresh_token).await {
        Ok(outcome) => {
            HttpResponse::Ok().json(AuthResponse::authenticated(outcome.access_token, outcome.user))
        }
        Err(error) => handle_domain_error(&error, lang),
    }
}
