//! Extractors whose rejections use the JSON error body
//!
//! axum answers malformed requests with plain text before a handler runs.
//! These wrappers turn those rejections into `InvalidInput` errors tagged
//! with the request id.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use petadopt_core::{ExError, ExErrorKind, FormFields};
use petadopt_core_types::RequestId;

use crate::error::ApiError;

/// Submitted form fields
#[derive(Debug)]
pub struct FormInput(pub FormFields);

/// Record key from the `:id` path segment
#[derive(Debug)]
pub struct RecordKey(pub String);

fn invalid_input(message: String, request_id: Option<RequestId>) -> ApiError {
    let err = ExError::new(ExErrorKind::InvalidInput).with_message(message);
    ApiError::from(match request_id {
        Some(request_id) => err.with_request_id(request_id),
        None => err,
    })
}

#[async_trait]
impl<S> FromRequest<S> for FormInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req.extensions().get::<RequestId>().cloned();
        match Form::<FormFields>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self(fields)),
            Err(rejection) => Err(invalid_input(rejection.body_text(), request_id)),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts.extensions.get::<RequestId>().cloned();
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(key)) => Ok(Self(key)),
            Err(rejection) => Err(invalid_input(rejection.body_text(), request_id)),
        }
    }
}
