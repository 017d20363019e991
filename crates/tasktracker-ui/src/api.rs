//! Task API client
//!
//! Thin wrappers over `fetch` via gloo-net. Off-wasm builds (native unit
//! tests) get a stub that reports the API as unreachable.

use serde::Deserialize;
use tasktracker_core::{CreateTaskRequest, Task};

use crate::error::{ApiError, Result};

/// Collection endpoint for tasks
pub const TASKS_ENDPOINT: &str = "/api/tasks";

/// Error body returned by the API
#[derive(Debug, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct ErrorBody {
    error: String,
}

/// Extract a readable message from a failed response body.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn error_message(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());
    ApiError::Status { status, message }
}

/// GET /api/tasks
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// unparseable body.
pub async fn fetch_tasks() -> Result<Vec<Task>> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get(TASKS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(response.status(), &body));
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Network(format!("{TASKS_ENDPOINT} is only reachable from the browser")))
    }
}

/// POST /api/tasks
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or an
/// unparseable body.
pub async fn create_task(request: &CreateTaskRequest) -> Result<Task> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::post(TASKS_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(response.status(), &body));
        }

        response
            .json::<Task>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = request;
        Err(ApiError::Network(format!("{TASKS_ENDPOINT} is only reachable from the browser")))
    }
}
