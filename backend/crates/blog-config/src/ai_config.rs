use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AI_BASE_URL, DEFAULT_AI_MAX_TOKENS, DEFAULT_AI_MODEL,
    DEFAULT_AI_TEMPERATURE, DEFAULT_AI_TIMEOUT_SECS, MAX_AI_MAX_TOKENS, MAX_AI_TEMPERATURE,
    MAX_AI_TIMEOUT_SECS, MIN_AI_MAX_TOKENS, MIN_AI_TEMPERATURE, MIN_AI_TIMEOUT_SECS,
};

use serde::Deserialize;

/// OpenAI-compatible chat completion settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// AI assistance is disabled when unset
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_AI_BASE_URL),
            model: String::from(DEFAULT_AI_MODEL),
            temperature: DEFAULT_AI_TEMPERATURE,
            max_tokens: DEFAULT_AI_MAX_TOKENS,
            timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
        }
    }
}

impl AiConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_AI_TEMPERATURE..=MAX_AI_TEMPERATURE).contains(&self.temperature) {
            return Err(ConfigError::ai(format!(
                "ai.temperature must be {}-{}, got {}",
                MIN_AI_TEMPERATURE, MAX_AI_TEMPERATURE, self.temperature
            )));
        }

        if !(MIN_AI_MAX_TOKENS..=MAX_AI_MAX_TOKENS).contains(&self.max_tokens) {
            return Err(ConfigError::ai(format!(
                "ai.max_tokens must be {}-{}, got {}",
                MIN_AI_MAX_TOKENS, MAX_AI_MAX_TOKENS, self.max_tokens
            )));
        }

        if !(MIN_AI_TIMEOUT_SECS..=MAX_AI_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::ai(format!(
                "ai.timeout_secs must be {}-{}, got {}",
                MIN_AI_TIMEOUT_SECS, MAX_AI_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ai("ai.model cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ai(format!(
                "ai.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
