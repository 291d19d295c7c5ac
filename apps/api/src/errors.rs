use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::experience::validation::FieldViolation;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {} invalid field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation error",
                    "details": details
                }),
            ),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "API key not configured",
                        "message": "Please set OPENAI_API_KEY in your environment variables"
                    }),
                )
            }
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate experience",
                        "message": msg
                    }),
                )
            }
            AppError::OriginNotAllowed(origin) => (
                StatusCode::FORBIDDEN,
                json!({
                    "error": "Not allowed by CORS",
                    "message": origin
                }),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Something went wrong!",
                        "message": "An internal server error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
