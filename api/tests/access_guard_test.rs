//! Integration tests for the bearer token guard

mod common;

use actix_web::{http::header, http::StatusCode, test};
use ag_api::create_app;
use ag_core::services::TokenServiceConfig;
use chrono::Duration;
use serde_json::Value;

use common::{setup, setup_with, ACCESS_SECRET, REFRESH_SECRET};

#[actix_web::test]
async fn test_missing_header_rejected() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for uri in ["/api/protected", "/api/rentals", "/api/tasks"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Token no proporcionado");
    }
}

#[actix_web::test]
async fn test_valid_token_reaches_handler() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/protected")
        .insert_header((header::AUTHORIZATION, ctx.bearer(&ctx.admin)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Acceso autorizado");
    assert_eq!(body["user"]["userId"], ctx.admin.id.to_string());
    assert_eq!(body["user"]["username"], "admin");
}

#[actix_web::test]
async fn test_refresh_token_is_not_an_access_token() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let refresh_token = ctx.token_service.issue_refresh_token(&ctx.admin).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/protected")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", refresh_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Token inválido o expirado");
}

#[actix_web::test]
async fn test_expired_and_malformed_tokens_rejected() {
    let config = TokenServiceConfig::new(ACCESS_SECRET, REFRESH_SECRET)
        .with_access_ttl(Duration::seconds(-30));
    let ctx = setup_with(config).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for value in [ctx.bearer(&ctx.admin), "Bearer not.a.jwt".to_string(), "Token abc".to_string()] {
        let req = test::TestRequest::get()
            .uri("/api/protected")
            .insert_header((header::AUTHORIZATION, value.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", value);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "token_invalid");
    }
}

#[actix_web::test]
async fn test_english_rejection_message() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header((header::ACCEPT_LANGUAGE, "en-US,en;q=0.9"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Token not provided");
}

#[actix_web::test]
async fn test_health_and_unknown_routes_are_public() {
    let ctx = setup().await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
