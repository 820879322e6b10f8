//! Shared to-do list endpoints. All require a bearer access token.

use actix_web::{web, HttpRequest, HttpResponse};
use ag_core::domain::entities::task::TaskStatus;
use ag_core::repositories::{RentalRepository, TaskRepository, UserRepository};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{
    CreateTaskRequest, SuccessResponse, TaskResponse, TasksQuery, TasksResponse,
    UpdateTaskStatusRequest,
};
use crate::handlers::{bad_request, handle_domain_error};
use crate::i18n::{detect_language, Message};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/tasks?status=
///
/// An unrecognized status is ignored and every task is listed.
pub async fn list_tasks<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    query: web::Query<TasksQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let status = query
        .status
        .as_deref()
        .and_then(|raw| raw.parse::<TaskStatus>().ok());

    match state.task_service.list(status).await {
        Ok(tasks) => HttpResponse::Ok().json(TasksResponse {
            success: true,
            tasks,
        }),
        Err(error) => handle_domain_error(&error, lang),
    }
}

/// Handler for POST /api/tasks
///
/// # Request Body
///
/// ```json
/// { "title": "Comprar leña", "description": "optional" }
/// ```
pub async fn create_task<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    auth: AuthContext,
    body: Result<web::Json<CreateTaskRequest>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let request = match body {
        Ok(body) if body.validate().is_ok() => body.into_inner(),
        _ => return bad_request(Message::InvalidData, lang),
    };

    match state
        .task_service
        .create(auth.user_id, &request.title, request.description)
        .await
    {
        Ok(task) => HttpResponse::Ok().json(TaskResponse {
            success: true,
            task,
        }),
        Err(error) => handle_domain_error(&error, lang),
    }
}

/// Handler for PATCH /api/tasks
///
/// # Request Body
///
/// ```json
/// { "id": "<uuid>", "status": "DONE" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed id, unknown status
/// - 404 Not Found: No task with that id
pub async fn update_task_status<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    body: Result<web::Json<UpdateTaskStatusRequest>, actix_web::Error>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);
    let request = body.map(web::Json::into_inner).unwrap_or_default();

    let Some(id) = request.id.as_deref().and_then(|id| Uuid::parse_str(id).ok()) else {
        return bad_request(Message::InvalidTaskId, lang);
    };
    let Some(status) = request
        .status
        .as_deref()
        .and_then(|status| status.parse::<TaskStatus>().ok())
    else {
        return bad_request(Message::InvalidStatus, lang);
    };

    match state.task_service.update_status(id, status).await {
        Ok(task) => HttpResponse::Ok().json(TaskResponse {
            success: true,
            task,
        }),
        Err(error) => handle_domain_error(&error, lang),
    }
}

/// Handler for DELETE /api/tasks/{id}
pub async fn delete_task<U, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, R, T>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RentalRepository + 'static,
    T: TaskRepository + 'static,
{
    let lang = detect_language(&req);

    let Ok(id) = Uuid::parse_str(&path) else {
        return bad_request(Message::InvalidTaskId, lang);
    };

    match state.task_service.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Err(error) => handle_domain_error(&error, lang),
    }
}
