//! Task endpoints: GET /api/tasks, POST /api/tasks

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tasktracker_core::{CreateTaskRequest, NewTask, Task};
use tracing::{debug, error, warn};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// GET /api/tasks - every task, newest first
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.store.list_tasks().await.map_err(|err| {
        error!(error = %err, "Failed to list tasks");
        AppError::from(err)
    })?;

    debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// POST /api/tasks - validate the body, insert it, return the stored row
///
/// Validation runs in order: body parses as JSON, required fields present,
/// then field rules. The store is only touched once all three pass.
pub async fn create_task(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>)> {
    let new_task = parse_payload(payload)?;

    let task = state.store.insert_task(new_task).await.map_err(|err| {
        error!(error = %err, "Failed to create task");
        AppError::from(err)
    })?;

    debug!(id = %task.id, title = %task.title, "Created task");
    Ok((StatusCode::CREATED, Json(task)))
}

fn parse_payload(
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<NewTask> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected malformed task body");
        AppError::BadRequest(rejection.body_text())
    })?;

    request.validate().map_err(|err| {
        warn!(reason = %err, "Rejected invalid task");
        AppError::from(err)
    })
}
