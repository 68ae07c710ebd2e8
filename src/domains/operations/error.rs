//! Operation-specific error types.

use thiserror::Error;

use crate::domains::upstream::UpstreamError;

/// Errors produced while resolving or executing an operation.
#[derive(Debug, Clone, Error)]
pub enum OperationError {
    /// The requested operation is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// A structurally required argument is missing or malformed.
    #[error("Invalid arguments for {operation}: {message}")]
    Validation {
        operation: &'static str,
        message: String,
    },

    /// The upstream call failed.
    #[error("{operation} failed: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source: UpstreamError,
    },
}

impl OperationError {
    /// Create an "unknown operation" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a validation error.
    pub fn validation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            operation,
            message: message.into(),
        }
    }

    /// Wrap an upstream failure.
    pub fn upstream(operation: &'static str, source: UpstreamError) -> Self {
        Self::Upstream { operation, source }
    }

    /// The upstream HTTP status, when the failure came from a ShipStation answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { source, .. } => source.status(),
            _ => None,
        }
    }
}
