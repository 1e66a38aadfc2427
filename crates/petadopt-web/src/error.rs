//! HTTP mapping of the canonical error

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petadopt_core::{ExError, ExErrorKind};

/// Response wrapper for `ExError`
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

/// Status code for an error kind
pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::MissingField | ExErrorKind::InvalidField | ExErrorKind::InvalidInput => {
            StatusCode::BAD_REQUEST
        }
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::DuplicateKey
        | ExErrorKind::ReferenceViolation
        | ExErrorKind::ConstraintViolation => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind());

        // Server-side detail stays in the log
        let message = if status.is_server_error() {
            tracing::error!(err.code = err.code(), error = %err, "request failed");
            "internal error".to_string()
        } else {
            tracing::debug!(err.code = err.code(), error = %err, "request rejected");
            err.message().to_string()
        };

        let body = serde_json::json!({
            "status": "error",
            "code": err.code(),
            "message": message,
            "field": err.field(),
            "request_id": err.request_id().map(|id| id.as_str()),
        });
        (status, Json(body)).into_response()
    }
}
