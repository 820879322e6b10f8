use actix_web::{HttpRequest, HttpResponse};

use crate::dto::{ProtectedResponse, ProtectedUser};
use crate::i18n::{detect_language, Message};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/protected
///
/// Echoes the caller decoded from the bearer token.
pub async fn protected(req: HttpRequest, auth: AuthContext) -> HttpResponse {
    let lang = detect_language(&req);

    HttpResponse::Ok().json(ProtectedResponse {
        message: Message::AccessGranted.text(lang).to_string(),
        user: ProtectedUser {
            user_id: auth.user_id,
            username: auth.username,
        },
    })
}
