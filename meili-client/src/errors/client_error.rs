//! Client error types.
//!
//! This module defines the errors every resource operation can return.
//! Errors are never recovered from inside the client.

use thiserror::Error;

/// Errors that can occur while calling the search service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The service reported no such resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request was rejected, either locally or by the service.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The request could not be sent or its response could not be read.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The API key is missing or lacks the required permission.
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    /// Any other non-success status.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The client could not be built from its configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An update was still pending when the wait ran out.
    #[error("Update {update_id} still pending after {waited_ms}ms")]
    Timeout { update_id: u64, waited_ms: u64 },
}

impl ClientError {
    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Map a non-success HTTP status and the service's message to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => Self::NotFound(message),
            400 | 409 | 422 => Self::ValidationError(message),
            401 | 403 => Self::UnauthorizedError(message),
            _ => Self::ApiError { status, message },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
