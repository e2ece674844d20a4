//! Client configuration

use serde::{Deserialize, Serialize};

use crate::error::{MusicGptError, Result};

/// Default MusicGPT public API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.musicgpt.com/api/public/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the MusicGPT HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// Raw API key, sent as the `Authorization` header without a scheme prefix
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration from `MUSICGPT_API_KEY` and optional `MUSICGPT_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("MUSICGPT_API_KEY").map_err(|_| {
            MusicGptError::config(
                "No API key configured. Please set the MUSICGPT_API_KEY environment variable.",
            )
        })?;

        let mut builder = ConfigBuilder::new().api_key(&api_key);
        if let Ok(base_url) = std::env::var("MUSICGPT_BASE_URL") {
            builder = builder.base_url(&base_url);
        }

        Ok(builder.build())
    }
}

/// Builder for [`ClientConfig`]
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::new(String::new()),
        }
    }

    /// API key
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.config.api_key = api_key.to_string();
        self
    }

    /// Override the API base URL
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Request timeout in seconds
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
