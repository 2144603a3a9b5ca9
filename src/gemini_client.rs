use crate::config::Config;
use crate::error::AnalyzeError;
use crate::gemini::{GeminiRequest, GeminiResponse};
use std::sync::Arc;
use tracing::{debug, info};

/// Thin client for the Gemini `generateContent` endpoint. Holds the shared
/// reqwest client plus the process-wide model and credential; constructed
/// once in main and injected into the handler state.
#[derive(Debug)]
pub struct GeminiClient {
    http_client: Arc<reqwest::Client>,
    config: Config,
}

impl GeminiClient {
    pub fn new(http_client: Arc<reqwest::Client>, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn build_target_url(&self) -> String {
        let api_base = &self.config.api_base;
        let path = format!("models/{}:generateContent", self.config.model);
        let base = if api_base.ends_with('/') {
            format!("{}{}", api_base, path)
        } else {
            format!("{}/{}", api_base, path)
        };
        // Gemini authenticates with an API key query param, not a header.
        format!("{}?key={}", base, self.config.api_key)
    }

    /// Sends one prompt-plus-image request and returns the generated text.
    /// Any transport error, non-2xx status, unparsable body, or empty
    /// candidate list surfaces as `AnalyzeError::Upstream`.
    pub async fn generate(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, AnalyzeError> {
        let body = GeminiRequest::analyze_image(prompt, image_base64, mime_type);
        let target_url = self.build_target_url();

        info!(
            "Forwarding analysis request to Gemini model: {}",
            self.config.model
        );
        debug!(
            "request body: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );

        let response = self
            .http_client
            .post(&target_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalyzeError::Upstream(format!(
                "Gemini returned status {}: {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AnalyzeError::Upstream(format!("failed to parse response: {}", e)))?;
        debug!(
            "raw response: {:?}",
            serde_json::to_string(&gemini_response)
        );

        gemini_response
            .first_text()
            .ok_or_else(|| AnalyzeError::Upstream("response contained no text".to_string()))
    }
}
