//! REST error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use super::timestamp;
use crate::domains::operations::OperationError;

const INTERNAL_ERROR: &str = "Internal Server Error";

/// An error rendered as `{error, timestamp, path}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            path: path.into(),
        }
    }

    /// A 500 that keeps its descriptive message, for rejected request input.
    pub fn rejected(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, path)
    }

    /// Map a dispatcher failure: upstream answers keep their status and
    /// everything else is a 500. Argument problems keep their message;
    /// transport and lookup failures are opaque.
    pub fn from_operation(err: OperationError, path: impl Into<String>) -> Self {
        let path = path.into();
        match &err {
            OperationError::Validation { .. } => Self::rejected(err.to_string(), path),
            OperationError::Upstream { source, .. } => match source.status() {
                Some(status) => {
                    let status =
                        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                    Self::new(status, source.to_string(), path)
                }
                None => {
                    error!(path = %path, "{err}");
                    Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, path)
                }
            },
            OperationError::UnknownOperation(_) => {
                error!(path = %path, "{err}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, path)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!(status = self.status.as_u16(), path = %self.path, "{}", self.message);
        } else if self.message != INTERNAL_ERROR {
            error!(status = self.status.as_u16(), path = %self.path, "{}", self.message);
        }
        let body = json!({
            "error": self.message,
            "timestamp": timestamp(),
            "path": self.path,
        });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::upstream::UpstreamError;

    #[test]
    fn test_upstream_status_is_kept() {
        let err = ApiError::from_operation(
            OperationError::upstream(
                "get_label_by_id",
                UpstreamError::Status {
                    status: 422,
                    body: "bad".to_string(),
                },
            ),
            "/api/labels/x",
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "ShipStation API error 422: bad");
    }

    #[test]
    fn test_transport_failure_is_opaque() {
        let err = ApiError::from_operation(
            OperationError::upstream("get_carriers", UpstreamError::transport("refused")),
            "/api/carriers",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_ERROR);
    }

    #[test]
    fn test_validation_is_server_error_with_message() {
        let err = ApiError::from_operation(
            OperationError::validation("create_tag", "missing required argument 'name'"),
            "/api/tags",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("name"));
    }
}
