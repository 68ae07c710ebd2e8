//! Error types and handling for the gateway.
//!
//! This module defines the error type for process startup: loading the
//! configuration, building the upstream client and running a transport.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::upstream::UpstreamError;

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the gateway.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error building or talking to the upstream client.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Error starting or running a front end.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
