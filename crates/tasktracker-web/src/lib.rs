//! TaskTracker Web Server
//!
//! JSON task API plus static hosting for the compiled UI, with tower
//! middleware for CORS, tracing, and compression.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::{AppConfig, ConfigError, ServerConfig, StoreBackend, StoreConfig};
pub use error::{AppError, ErrorResponse};
pub use routes::health::HealthResponse;
pub use server::{create_app, run_server};
pub use state::AppState;
pub use store::{InMemoryTaskStore, PostgrestClient, PostgrestTaskStore, StoreError, TaskStore};

/// Web server errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task store could not be built
    #[error("Task store error: {0}")]
    Store(#[from] StoreError),
}
