#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only validation errors and the single recommendation-step failure may abort
/// a user-visible operation. Per-candidate detail failures and chat failures
/// are contained where they happen and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unsupported chat role: {0}")]
    UnsupportedRole(String),

    #[error("Recommendation service error: {0}")]
    RecommendationUnavailable(String),

    #[error("Recommendation service overloaded")]
    ServiceOverloaded,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::UnsupportedRole(role) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_ROLE",
                format!("Chat role '{role}' is not supported"),
            ),
            AppError::RecommendationUnavailable(msg) => {
                tracing::error!("Recommendation service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RECOMMENDATION_UNAVAILABLE",
                    "Career recommendations could not be generated. Please try again.".to_string(),
                )
            }
            AppError::ServiceOverloaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_OVERLOADED",
                "The recommendation service is experiencing high demand right now. \
                 Please try again in a moment."
                    .to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
