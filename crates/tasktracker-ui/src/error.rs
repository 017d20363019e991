//! Error types for the browser client
//!
//! Every failure talking to the task API lands in `ApiError`; components
//! decide whether to toast it or log it.

use thiserror::Error;

/// Errors returned by the task API client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Short message suitable for a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { .. } => "Failed to create task".to_string(),
            Self::Network(msg) | Self::Decode(msg) | Self::Encode(msg) if !msg.is_empty() => {
                msg.clone()
            }
            _ => "Something went wrong".to_string(),
        }
    }
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;
