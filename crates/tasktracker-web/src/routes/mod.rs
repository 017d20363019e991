//! REST API routes
//!
//! All routes are relative to the `/api` prefix applied in server.rs.
//!
//! ## Route Structure
//!
//! - `GET /api/health` - Liveness check
//! - `GET /api/tasks` - List all tasks, newest first
//! - `POST /api/tasks` - Validate and create a task

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod health;
pub mod tasks;

/// Create the API router.
///
/// ```ignore
/// use tasktracker_web::{routes, AppState};
///
/// let router = routes::create_router().with_state(AppState::in_memory());
/// ```
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
}
