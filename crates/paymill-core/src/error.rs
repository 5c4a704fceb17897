//! # Paymill Error Types
//!
//! Typed error handling for the Paymill client.
//! Every operation returns `Result<T, PaymillError>`: a call yields either
//! the parsed JSON value or exactly one of these errors.

use crate::codes::StatusKind;
use serde_json::Value;
use thiserror::Error;

/// Message used when the API answers with a body that is not JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON from Paymill API";

/// Core error type for all Paymill operations
#[derive(Debug, Error)]
pub enum PaymillError {
    /// An identifier argument is not a usable string
    #[error("{label} must be a string{reason}")]
    InvalidArgument { label: &'static str, reason: String },

    /// Request parameters have a shape the form encoding cannot express
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The resource does not expose the requested operation
    #[error("Unsupported operation: {resource}.{operation}")]
    UnsupportedOperation {
        resource: &'static str,
        operation: &'static str,
    },

    /// Configuration errors (missing key, HTTP client could not be built)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Form encoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Connection, DNS or TLS failure from the underlying HTTP client
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body could not be decoded as JSON
    #[error("{}", INVALID_JSON_MESSAGE)]
    InvalidJson {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-200 status
    #[error("{message}")]
    Api {
        status: u16,
        response_code: Option<i64>,
        message: String,
        response: Value,
    },
}

impl PaymillError {
    /// Build an argument error for the identifier named `label`.
    pub fn invalid_argument(label: &'static str, reason: impl Into<String>) -> Self {
        PaymillError::InvalidArgument {
            label,
            reason: reason.into(),
        }
    }

    /// Wrap a lower-level transport error without altering it.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PaymillError::Transport(Box::new(err))
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PaymillError::InvalidJson { status, .. } | PaymillError::Api { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Numeric API response code carried in the error body, if any.
    pub fn response_code(&self) -> Option<i64> {
        match self {
            PaymillError::Api { response_code, .. } => *response_code,
            _ => None,
        }
    }

    /// Parsed response body attached to API errors.
    pub fn response(&self) -> Option<&Value> {
        match self {
            PaymillError::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Classification of the HTTP status, following the API documentation.
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status().map(StatusKind::from_status)
    }

    /// Returns true for errors raised before any network activity
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            PaymillError::InvalidArgument { .. }
                | PaymillError::InvalidParams(_)
                | PaymillError::UnsupportedOperation { .. }
        )
    }
}

/// Result type alias for Paymill operations
pub type PaymillResult<T> = Result<T, PaymillError>;
