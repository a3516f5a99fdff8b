use crate::error::AppError;
use crate::models::Task;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub task: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All tasks in storage order", body = [Task]),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "Todos"
)]
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = state.db.list().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Storage rejected the task", body = MessageResponse)
    ),
    tag = "Todos"
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = Task::new(request.task);

    state
        .db
        .insert(&task)
        .await
        .map_err(AppError::into_bad_request)?;

    tracing::info!(task_id = %task.id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task's completion flag
///
/// An identifier that matches no task yields a 200 with a `null` body
/// rather than an error.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "Task identifier")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task, or null when no task matched", body = Task),
        (status = 400, description = "Storage error", body = MessageResponse)
    ),
    tag = "Todos"
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Option<Task>>, AppError> {
    let updated = state
        .db
        .set_completed(&id, request.is_completed)
        .await
        .map_err(AppError::into_bad_request)?;

    if updated.is_none() {
        tracing::debug!(task_id = %id, "Update matched no task");
    }

    Ok(Json(updated))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "Task identifier")
    ),
    responses(
        (status = 200, description = "Confirmation, whether or not a task existed", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "Todos"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.db.delete(&id).await?;

    Ok(Json(MessageResponse {
        message: "task deleted".to_string(),
    }))
}
