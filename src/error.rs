use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
///
/// Every failure a handler or the admin guard reports is one of these
/// kinds; anything unexpected is flattened to `Internal` before it
/// reaches the wire so underlying causes never leak.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The route only accepts its designated write method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// A submission failed a field-level check; the message names the
    /// first check that failed.
    #[error("{0}")]
    Validation(String),

    /// The current user is known but lacks the Admin role.
    #[error("Access denied. Admin privileges required.")]
    Forbidden,

    /// Catch-all for unexpected failures (store I/O, serialization).
    #[error("Internal Server Error - Unable to save user data")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
