//! TaskTracker core types
//!
//! The `Task` entity, the create payload, and the validation schema shared by
//! the HTTP API (`tasktracker-web`) and the browser form (`tasktracker-ui`).
//!
//! This crate compiles for both native and `wasm32-unknown-unknown` targets.

#![forbid(unsafe_code)]

pub mod error;
pub mod schema;
pub mod task;

pub use error::{Field, MISSING_REQUIRED_FIELDS, SchemaError, ValidationError, ValidationErrors};
pub use schema::{
    CreateTaskRequest, DATE_FORMAT, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, ensure_not_past,
    format_date, parse_date,
};
pub use task::{NewTask, Priority, Task, TaskStatus};
