use anyhow::{Context, bail};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Reads the credential from `GEMINI_API_KEY`. Model and API base come
    /// from the CLI; they are fixed for the process lifetime, never taken
    /// from individual requests.
    pub fn from_env(model: &str, api_base: &str) -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable is not set")?;
        if api_key.is_empty() {
            bail!("GEMINI_API_KEY environment variable is empty");
        }
        Ok(Config {
            api_key,
            model: model.to_string(),
            api_base: api_base.to_string(),
        })
    }
}
