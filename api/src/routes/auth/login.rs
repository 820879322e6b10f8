use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::{error_response, handle_domain_error};
use crate::i18n::{detect_language, Message};

use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};
use ag_shared::{error_codes, AuthResponse};

use super::refresh_cookie;

/// Handler for POST /api/auth/login
///
/// # Request Body
///
/// ```json
/// { "username": "admin", "password": "..." }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// `{ "success": true, "accessToken": "eyJ...", "user": { "id", "username", "color" } }`
/// plus `Set-Cookie: refresh_token=...; HttpOnly; SameSite=Lax; Path=/`
///
/// ## Errors
/// - 400 Bad Request: Body is not JSON or a field is empty
/// - 401 Unauthorized: Unknown user or wrong password (indistinguishable)
/// - 500 Internal Server Error
pub async fn login<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    body: Result<web::Json<LoginRequest>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let request = match body {
        Ok(body) if body.validate().is_ok() => body.into_inner(),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                error_codes::VALIDATION_ERROR,
                Message::MalformedCredentials,
                lang,
            )
        }
    };

    match state
        .auth_service
        .authenticate(&request.username, &request.password)
        .await
    {
        Ok(Some(outcome)) => HttpResponse::Ok()
            .cookie(refresh_cookie(&state.cookie, outcome.tokens.refresh_token))
            .json(AuthResponse::authenticated(
                outcome.tokens.access_token,
                outcome.user,
            )),
        Ok(None) => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::INVALID_CREDENTIALS,
            Message::InvalidCredentials,
            lang,
        ),
        Err(error) => handle_domain_error(&error, lang),
    }
}
