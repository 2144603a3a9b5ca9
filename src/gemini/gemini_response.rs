use crate::gemini::{GeminiCandidate, GeminiUsage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<GeminiUsage>,
    #[serde(rename = "modelVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GeminiResponse {
    /// Text of the first candidate, if the response produced any.
    pub fn first_text(&self) -> Option<String> {
        let text = self.candidates.first()?.text();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_candidate_text() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "a tabby " }, { "text": "cat" }]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 263,
                "candidatesTokenCount": 4,
                "totalTokenCount": 267
            },
            "modelVersion": "gemini-1.5-flash-latest"
        });
        let resp: GeminiResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("a tabby cat"));
    }

    #[test]
    fn no_candidates_yields_none() {
        let resp: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.first_text().is_none());
    }
}
