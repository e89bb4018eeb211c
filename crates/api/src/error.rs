use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use techdocs_rag_common::TechDocsError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Core error: {0}")]
    Core(#[from] TechDocsError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_code) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
            ApiError::Core(err) => match err {
                TechDocsError::EmptyQuery => (
                    StatusCode::BAD_REQUEST,
                    "Query must not be empty".to_string(),
                    "EMPTY_QUERY",
                ),
                TechDocsError::Configuration(msg) => {
                    error!("Configuration error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Configuration error".to_string(),
                        "CONFIGURATION_ERROR",
                    )
                }
                TechDocsError::Internal(msg) => {
                    error!("Core error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        "INTERNAL_ERROR",
                    )
                }
            },
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        let response_body = json!({
            "success": false,
            "error": error_message,
            "error_code": error_code,
            "timestamp": chrono::Utc::now()
        });

        (status, Json(response_body)).into_response()
    }
}

// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
