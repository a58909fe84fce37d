//! Error types for the coffee service
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for store access, seeding and streaming.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The store rejected or failed a command
    #[error("Store command failed: {0}")]
    Command(#[from] redis::RedisError),

    /// A store operation did not complete in time
    #[error("Store operation '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// A record could not be encoded or decoded
    #[error("Invalid record payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// One or more seed writes were rejected
    #[error("Seeding failed: {failed} of {total} writes rejected")]
    Seed { failed: usize, total: usize },
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::Connection(_) | StoreError::Timeout { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the coffee service.
pub type Result<T> = std::result::Result<T, StoreError>;
