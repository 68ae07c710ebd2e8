//! Upstream-specific error types.

use thiserror::Error;

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors raised at the ShipStation boundary.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// ShipStation answered with a non-2xx status.
    #[error("ShipStation API error {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received (connection failure, timeout, broken body).
    #[error("ShipStation request failed: {0}")]
    Transport(String),

    /// The HTTP client could not be built.
    #[error("Failed to initialize ShipStation client: {0}")]
    Init(String),
}

impl UpstreamError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// The upstream HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_embeds_code() {
        let err = UpstreamError::Status {
            status: 404,
            body: r#"{"message":"not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            r#"ShipStation API error 404: {"message":"not found"}"#
        );
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = UpstreamError::transport("connection refused");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
