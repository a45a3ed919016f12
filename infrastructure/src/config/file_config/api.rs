//! Remote API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Raw `[api]` configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    pub endpoint: String,
    /// Model name sent with every request
    pub model: String,
    /// Request timeout; unset means no timeout
    pub timeout_seconds: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.deepseek.com/v1".to_string(),
            model: "deepseek-chat".to_string(),
            timeout_seconds: None,
        }
    }
}
