use crate::models::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Outcome of a failed analyze request. Each variant maps to exactly one
/// HTTP status; upstream detail stays in the logs and out of the body.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Validation(String),

    #[error("GEMINI_API_KEY is not configured")]
    Configuration,

    #[error("Gemini call failed: {0}")]
    Upstream(String),
}

impl AnalyzeError {
    pub fn missing_fields() -> Self {
        AnalyzeError::Validation("image, mimeType, and prompt are required".to_string())
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(e: reqwest::Error) -> Self {
        AnalyzeError::Upstream(e.to_string())
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AnalyzeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AnalyzeError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server is missing the Gemini API credential".to_string(),
            ),
            AnalyzeError::Upstream(detail) => {
                error!("Gemini API call failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "the image analysis request failed on the server".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
