//! Bearer token guard for protected API endpoints.
//!
//! The guard reads the `Authorization` header, verifies the access token and
//! injects an [`AuthContext`] into the request. It never issues or rotates
//! tokens.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::{header::AUTHORIZATION, header::HeaderMap, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use ag_core::domain::entities::token::{TokenPayload, TokenType};
use ag_core::services::TokenService;
use ag_shared::error_codes;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use uuid::Uuid;

use crate::handlers::error_response;
use crate::i18n::{detect_language, Message};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller, available to handlers behind the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub username: String,
}

impl From<TokenPayload> for AuthContext {
    fn from(payload: TokenPayload) -> Self {
        Self {
            user_id: payload.user_id,
            username: payload.username,
        }
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Verify the bearer access token of a request
///
/// Returns `None` on any failure; the caller answers 401.
pub fn check_access(headers: &HeaderMap, token_service: &TokenService) -> Option<TokenPayload> {
    let token = extract_bearer_token(headers)?;
    token_service.verify_optional(token, TokenType::Access)
}

/// Middleware factory guarding a scope with access tokens
#[derive(Clone)]
pub struct AccessGuard {
    token_service: Arc<TokenService>,
}

impl AccessGuard {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGuardMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

pub struct AccessGuardMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AccessGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let rejection = if !req.headers().contains_key(AUTHORIZATION) {
            Some((error_codes::TOKEN_MISSING, Message::TokenMissing))
        } else {
            match check_access(req.headers(), &self.token_service) {
                Some(payload) => {
                    req.extensions_mut().insert(AuthContext::from(payload));
                    None
                }
                None => Some((error_codes::TOKEN_INVALID, Message::TokenInvalid)),
            }
        };

        Box::pin(async move {
            if let Some((code, message)) = rejection {
                log::debug!("Rejected {} {}: {}", req.method(), req.path(), code);
                let lang = detect_language(req.request());
                let response = error_response(StatusCode::UNAUTHORIZED, code, message, lang);
                return Ok(req.into_response(response).map_into_right_body());
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extractor for the authenticated caller
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
