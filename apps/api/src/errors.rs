use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::generation::letter::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Extraction(ExtractionError::MissingField(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_FIELD")
            }
            AppError::Extraction(ExtractionError::Recognizer(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_ERROR")
            }
            AppError::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_ERROR"),
            AppError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Extraction(e @ ExtractionError::MissingField(_)) => e.to_string(),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                "The CV could not be analysed".to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                "The cover letter could not be generated".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("IO error: {e}");
                "A file storage error occurred".to_string()
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
