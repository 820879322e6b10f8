//! Application state and factory
//!
//! This module holds the shared application state and builds the
//! Actix-web application around it.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse,
};
use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};
use ag_core::services::{AuthService, RentalService, TaskService, TokenService};
use ag_shared::{error_codes, RefreshCookieConfig};

use crate::handlers::error_response;
use crate::i18n::{detect_language, Message};
use crate::middleware::auth::AccessGuard;
use crate::routes::{auth, protected::protected, rentals, tasks};

/// Services shared by every request
pub struct AppState<U, R, T>
where
    U: UserRepository,
    R: RentalRepository,
    T: TaskRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub rental_service: Arc<RentalService<R>>,
    pub task_service: Arc<TaskService<T>>,
    pub token_service: Arc<TokenService>,
    pub cookie: RefreshCookieConfig,
}

impl<U, R, T> AppState<U, R, T>
where
    U: UserRepository,
    R: RentalRepository,
    T: TaskRepository,
{
    /// Wire the services around the given repositories
    pub fn new(
        users: Arc<U>,
        rentals: Arc<R>,
        tasks: Arc<T>,
        token_service: Arc<TokenService>,
        cookie: RefreshCookieConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users, Arc::clone(&token_service))),
            rental_service: Arc::new(RentalService::new(rentals)),
            task_service: Arc::new(TaskService::new(tasks)),
            token_service,
            cookie,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, R, T>(
    app_state: web::Data<AppState<U, R, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let guard = AccessGuard::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login::login::<U, R, T>))
                        .route("/refresh", web::post().to(auth::refresh::refresh::<U, R, T>))
                        .route("/logout", web::post().to(auth::logout::logout::<U, R, T>)),
                )
                .service(
                    web::resource("/protected")
                        .wrap(guard.clone())
                        .route(web::get().to(protected)),
                )
                .service(
                    web::resource("/rentals")
                        .wrap(guard.clone())
                        .route(web::get().to(rentals::list_rentals::<U, R, T>))
                        .route(web::post().to(rentals::create_rental::<U, R, T>))
                        .route(web::delete().to(rentals::delete_rental::<U, R, T>)),
                )
                .service(
                    web::scope("/tasks")
                        .wrap(guard)
                        .route("", web::get().to(tasks::list_tasks::<U, R, T>))
                        .route("", web::post().to(tasks::create_task::<U, R, T>))
                        .route("", web::patch().to(tasks::update_task_status::<U, R, T>))
                        .route("/{id}", web::delete().to(tasks::delete_task::<U, R, T>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "agenda-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        Message::ResourceNotFound,
        detect_language(&req),
    )
}
