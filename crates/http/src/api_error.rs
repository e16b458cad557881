//! Typed API error for HTTP handlers.
//!
//! Converts directory errors into HTTP responses with a JSON body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use unidir_core::DirectoryError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`. `Internal` logs the real
/// error server-side and returns a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(DirectoryError),
    /// 503 Service Unavailable: the store could not be set up or seeded.
    ServiceUnavailable(DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(err) => {
                tracing::error!(error = %err, kind = err.kind(), "directory not ready");
                (StatusCode::SERVICE_UNAVAILABLE, format!("directory unavailable ({})", err.kind()))
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Query(_) => Self::Internal(err),
            DirectoryError::Schema(_) | DirectoryError::Population(_) | DirectoryError::Insert(_) => {
                Self::ServiceUnavailable(err)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_are_internal() {
        let response = ApiError::from(DirectoryError::Query("boom".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn seeding_errors_are_unavailable() {
        let response =
            ApiError::from(DirectoryError::Population("missing".to_owned())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
