//! Localized user-facing messages
//!
//! Spanish is the default. English is used when `Accept-Language` prefers it.

use actix_web::{http::header, HttpRequest};
use ag_shared::Language;

/// Every message the API can put in an `error` or `message` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TokenMissing,
    TokenInvalid,
    MalformedCredentials,
    InvalidCredentials,
    RefreshTokenMissing,
    RefreshTokenInvalid,
    UserNotFound,
    SessionExpired,
    Unauthorized,
    InvalidParameters,
    InvalidData,
    InvalidTaskId,
    InvalidStatus,
    TaskNotFound,
    ResourceNotFound,
    RentalConflict,
    Conflict,
    AccessGranted,
    InternalError,
}

impl Message {
    /// Text of the message in `lang`
    pub fn text(self, lang: Language) -> &'static str {
        match lang {
            Language::Spanish => self.spanish(),
            Language::English => self.english(),
        }
    }

    fn spanish(self) -> &'static str {
        match self {
            Message::TokenMissing => "Token no proporcionado",
            Message::TokenInvalid => "Token inválido o expirado",
            Message::MalformedCredentials => "Credenciales inválidas",
            Message::InvalidCredentials => "Usuario o contraseña incorrectos",
            Message::RefreshTokenMissing => "Token de actualización no encontrado",
            Message::RefreshTokenInvalid => "Token de actualización inválido",
            Message::UserNotFound => "Usuario no encontrado",
            Message::SessionExpired => "Sesión expirada",
            Message::Unauthorized => "No autorizado",
            Message::InvalidParameters => "Parámetros inválidos",
            Message::InvalidData => "Datos inválidos",
            Message::InvalidTaskId => "ID de tarea inválido",
            Message::InvalidStatus => "Estado inválido",
            Message::TaskNotFound => "Tarea no encontrada",
            Message::ResourceNotFound => "Recurso no encontrado",
            Message::RentalConflict => "Ya tienes una reserva para ese día",
            Message::Conflict => "El recurso ya existe",
            Message::AccessGranted => "Acceso autorizado",
            Message::InternalError => "Error al procesar la solicitud",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Message::TokenMissing => "Token not provided",
            Message::TokenInvalid => "Invalid or expired token",
            Message::MalformedCredentials => "Invalid credentials",
            Message::InvalidCredentials => "Incorrect username or password",
            Message::RefreshTokenMissing => "Refresh token not found",
            Message::RefreshTokenInvalid => "Invalid refresh token",
            Message::UserNotFound => "User not found",
            Message::SessionExpired => "Session expired",
            Message::Unauthorized => "Unauthorized",
            Message::InvalidParameters => "Invalid parameters",
            Message::InvalidData => "Invalid data",
            Message::InvalidTaskId => "Invalid task ID",
            Message::InvalidStatus => "Invalid status",
            Message::TaskNotFound => "Task not found",
            Message::ResourceNotFound => "Resource not found",
            Message::RentalConflict => "You already have a booking for that day",
            Message::Conflict => "The resource already exists",
            Message::AccessGranted => "Access granted",
            Message::InternalError => "An error occurred while processing the request",
        }
    }
}

/// Pick the response language from `Accept-Language`
///
/// Tags are ranked by their `q` weight; the first supported one wins.
/// Anything unparseable falls back to Spanish.
pub fn detect_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(parse_accept_language)
        .unwrap_or_default()
}

/// Parse a header value such as `en-US,en;q=0.9,es;q=0.8`
pub fn parse_accept_language(header: &str) -> Language {
    let mut ranked: Vec<(Language, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let language = Language::from_tag(pieces.next()?)?;
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((language, quality))
        })
        .collect();

    // Stable sort keeps header order among equal weights
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.first().map(|(lang, _)| *lang).unwrap_or_default()
}
