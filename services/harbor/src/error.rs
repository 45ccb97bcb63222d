//! Custom error types for the harbor API
//!
//! Repositories propagate persistence failures verbatim; this module is the
//! sole translation boundary to HTTP status codes and the JSON envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the harbor API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Entity absent, or its path identifier was not well-formed
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Cross-entity mismatch on the nested reservation routes
    #[error("{0}")]
    BadRequest(String),

    /// Repository failure, carrying the operation context and the
    /// underlying message
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    /// Wrap a repository failure with the failing operation's context.
    pub fn internal(message: &str, err: anyhow::Error) -> Self {
        Self::Internal {
            message: message.to_string(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "message": format!("{} not found", what),
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": message,
                })),
            )
                .into_response(),
            ApiError::Internal { message, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": message,
                    "error": detail,
                })),
            )
                .into_response(),
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Catway").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response =
            ApiError::BadRequest("This reservation does not belong to this catway".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response =
            ApiError::internal("Failed to create catway", anyhow::anyhow!("duplicate key"))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn internal_envelope_carries_the_underlying_message() {
        let response =
            ApiError::internal("Failed to create catway", anyhow::anyhow!("duplicate key"))
                .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Failed to create catway"));
        assert_eq!(body["error"], json!("duplicate key"));
    }
}
