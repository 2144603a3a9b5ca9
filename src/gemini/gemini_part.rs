use crate::gemini::GeminiInlineData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
    // Other part shapes (functionCall, fileData, ...) are not used here.
}

impl GeminiPart {
    pub fn text(text: impl Into<String>) -> Self {
        GeminiPart::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        GeminiPart::InlineData {
            inline_data: GeminiInlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}
