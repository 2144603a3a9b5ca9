use crate::error::AnalyzeError;
use crate::gemini_client::GeminiClient;
use crate::models::{AnalyzeRequest, AnalyzeResponse};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    /// None when the process started without a usable credential. Every
    /// request then gets a configuration error before any parsing, and the
    /// Gemini API is never reached.
    pub gemini: Option<Arc<GeminiClient>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze).fallback(method_not_allowed))
        .route("/health", get(|| async { "OK" }))
        .layer(axum::middleware::from_fn(
            crate::request_id::inject_request_id,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// validate -> call Gemini -> shape response, with an early exit at each
/// stage. The body is taken as raw bytes so parse failures map to our own
/// 400 payload instead of the extractor's default rejection.
#[axum_macros::debug_handler]
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AnalyzeError> {
    let client = state.gemini.as_ref().ok_or(AnalyzeError::Configuration)?;

    let request: AnalyzeRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Failed to parse analyze request body: {}", e);
        AnalyzeError::missing_fields()
    })?;
    if !request.is_complete() {
        return Err(AnalyzeError::missing_fields());
    }

    debug!(
        "Received analyze request: mime_type={}, prompt length={}",
        request.mime_type,
        request.prompt.len()
    );

    let text = client
        .generate(&request.prompt, &request.image, &request.mime_type)
        .await?;

    info!("Analysis completed, {} chars generated", text.len());
    Ok(Json(AnalyzeResponse { result: text }))
}
