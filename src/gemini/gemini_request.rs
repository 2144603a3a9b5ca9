use crate::gemini::{GeminiContent, GeminiPart};
use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` call. The model name lives in
/// the URL path, not in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// One user turn: the text prompt first, then the inline image.
    /// The part order is significant to the model.
    pub fn analyze_image(prompt: &str, image_base64: &str, mime_type: &str) -> Self {
        GeminiRequest {
            contents: vec![GeminiContent::user(vec![
                GeminiPart::text(prompt),
                GeminiPart::inline_data(mime_type, image_base64),
            ])],
        }
    }
}
