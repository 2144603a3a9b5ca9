use crate::gemini::GeminiPart;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub role: Option<String>, // "user" or "model"
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    pub fn user(parts: Vec<GeminiPart>) -> Self {
        GeminiContent {
            role: Some("user".to_string()),
            parts,
        }
    }
}
