//! Mapping from request failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cafe_core::QueryError;

/// Everything a `/cafe` request can fail with. Failures are client errors
/// and render as `400 Bad Request` with a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The catalog rejected the parameters. The body is the fixed message of
    /// the [`QueryError`].
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
