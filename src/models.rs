use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`. All three fields must be present and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64-encoded image bytes.
    pub image: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub prompt: String,
}

impl AnalyzeRequest {
    pub fn is_complete(&self) -> bool {
        !self.image.is_empty() && !self.mime_type.is_empty() && !self.prompt.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
