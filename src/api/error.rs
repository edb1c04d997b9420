//! Service-error to HTTP-response mapping.

use crate::todo::services::TodoServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Wrapper rendering service rejections as HTTP responses.
///
/// Validation failures map to `400`, missing completion-update targets to
/// `404`, and store failures to `500`; every rejection carries a
/// `{ "error": message }` body with the service's human-readable message.
#[derive(Debug)]
pub struct ApiError(TodoServiceError);

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TodoServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
