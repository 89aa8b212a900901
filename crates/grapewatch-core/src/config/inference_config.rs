//! Inference provider configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the vision-model inference provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Provider name: "gemini" or "offline".
    pub provider: String,
    /// Model identifier passed to the provider.
    pub model: String,
    /// Base URL of the Generative Language API.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Environment variable consulted when `api_key` is not set.
    pub api_key_env: String,
    /// Explicit credential. Never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 60,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl InferenceConfig {
    /// Resolve the credential: explicit key first, then the environment.
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
            })
    }
}
