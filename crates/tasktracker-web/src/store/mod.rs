//! Task store layer.
//!
//! `TaskStore` is the port the HTTP handlers talk to. Two adapters implement it:
//!
//! - `InMemoryTaskStore`: process-local rows for development and tests
//! - `PostgrestTaskStore`: the hosted `tasks` table behind a PostgREST endpoint
//!
//! Every failure collapses into `StoreError`, whose `Display` is the message
//! handed back to API callers verbatim.

use std::sync::Arc;

use tasktracker_core::{NewTask, Task};
use thiserror::Error;

use crate::config::{StoreBackend, StoreConfig};

mod memory;
mod postgrest;

pub use memory::InMemoryTaskStore;
pub use postgrest::{Order, PostgrestClient, PostgrestTaskStore, TableQuery};

/// Task store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("{0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("{message}")]
    Response { status: u16, message: String },

    /// The store answered with a body that is not the expected shape.
    #[error("{0}")]
    Decode(String),

    /// The store client could not be built from configuration.
    #[error("{0}")]
    Config(String),
}

/// Repository trait for task rows.
#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    /// All rows, ordered by `created_at` descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Insert one row and return it with its store-assigned `id` and
    /// `created_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the row or cannot be reached.
    async fn insert_task(&self, task: NewTask) -> Result<Task, StoreError>;
}

/// Build the store selected by `config`.
///
/// # Errors
///
/// Returns [`StoreError::Config`] when the PostgREST client cannot be built.
pub fn from_config(config: &StoreConfig) -> Result<Arc<dyn TaskStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryTaskStore::new())),
        StoreBackend::Postgrest => Ok(Arc::new(PostgrestTaskStore::from_config(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_is_verbatim() {
        let err = StoreError::Response {
            status: 409,
            message: "duplicate key value violates unique constraint".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_from_config_memory() {
        let store = from_config(&StoreConfig::default());
        assert!(store.is_ok());
    }

    #[test]
    fn test_from_config_postgrest_without_url_fails() {
        let config = StoreConfig {
            backend: StoreBackend::Postgrest,
            ..Default::default()
        };
        assert!(matches!(from_config(&config), Err(StoreError::Config(_))));
    }
}
