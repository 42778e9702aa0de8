//! Body and query extractors whose rejections use the API error envelope.
//!
//! Axum's own `Json` and `Query` reject malformed input with a plain-text
//! body (and 422 for JSON that parses but does not match the DTO). These
//! wrappers route the rejection through [`AppError::BadRequest`] so every
//! failure carries `{ "error", "code" }` and a 400 status.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
///
/// ```ignore
/// async fn create(ApiJson(input): ApiJson<CreateIdea>) -> AppResult<()> { .. }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
