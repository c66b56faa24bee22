use anyhow::{Context, bail};

use gemini::client::DEFAULT_TIMEOUT_SECS;

/// Configuration for Gemini API access.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required, `API_KEY` is accepted as fallback)
    /// - GEMINI_MODEL: Model name (default: client default)
    /// - GEMINI_BASE_URL: API base URL (default: client default)
    /// - GEMINI_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let Some(api_key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) else {
            bail!("GEMINI_API_KEY environment variable must be set");
        };

        let timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {}", value))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            model: non_empty("GEMINI_MODEL"),
            base_url: non_empty("GEMINI_BASE_URL"),
            timeout_secs,
        })
    }
}
