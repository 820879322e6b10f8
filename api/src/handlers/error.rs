//! Mapping of domain errors to HTTP responses
//!
//! Every failing endpoint answers `{ success: false, error, code }` with a
//! localized `error`. Internal failures are logged here and never leak their
//! details to the client.

use actix_web::{http::StatusCode, HttpResponse};
use ag_core::errors::{AuthError, DomainError};
use ag_shared::{error_codes, ErrorResponse, Language};

use crate::i18n::Message;

/// Build an error response with a localized message
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: Message,
    lang: Language,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message.text(lang)))
}

/// 400 with the `validation_error` code
pub fn bad_request(message: Message, lang: Language) -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        message,
        lang,
    )
}

/// Status, machine code and message for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str, Message) {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            Message::InvalidData,
        ),
        DomainError::NotFound { resource } if resource == "Task" => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            Message::TaskNotFound,
        ),
        DomainError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            Message::ResourceNotFound,
        ),
        DomainError::Conflict { .. } => (
            StatusCode::CONFLICT,
            error_codes::CONFLICT,
            Message::Conflict,
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            Message::Unauthorized,
        ),
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                Message::InvalidCredentials,
            ),
            AuthError::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_REFRESH_TOKEN,
                Message::RefreshTokenInvalid,
            ),
            AuthError::MissingRefreshToken => (
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_MISSING,
                Message::RefreshTokenMissing,
            ),
            AuthError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                error_codes::USER_NOT_FOUND,
                Message::UserNotFound,
            ),
            AuthError::SessionExpired => (
                StatusCode::UNAUTHORIZED,
                error_codes::SESSION_EXPIRED,
                Message::SessionExpired,
            ),
        },
        DomainError::Token(_) => (
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            Message::TokenInvalid,
        ),
        DomainError::Configuration { .. } | DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            Message::InternalError,
        ),
    }
}

/// Handle domain errors with language support
pub fn handle_domain_error(error: &DomainError, lang: Language) -> HttpResponse {
    let (status, code, message) = classify(error);

    if status.is_server_error() {
        log::error!("Request failed: {}", error);
    } else {
        log::debug!("Request rejected ({}): {}", status.as_u16(), error);
    }

    error_response(status, code, message, lang)
}
