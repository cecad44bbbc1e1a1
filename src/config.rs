//! Model configuration
//!
//! All external-model settings live here and are read from the environment
//! once, before the first call. The credential is intentionally allowed to
//! be absent at construction time: a missing key fails each call at
//! invocation, not at startup.

use std::time::Duration;

/// Default endpoint for the generative model API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier. Overridable via `DEALSCAN_MODEL`.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default overall request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the external generative model client.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// API key for the model provider. May be empty; calls then fail
    /// with a missing-credential error.
    pub api_key: String,

    /// Base URL for the API.
    pub base_url: String,

    /// Model identifier to invoke.
    pub model: String,

    /// Overall request timeout.
    pub timeout: Duration,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ModelConfig {
    /// Build a configuration from the process environment.
    ///
    /// Reads `GEMINI_API_KEY`, `DEALSCAN_BASE_URL`, `DEALSCAN_MODEL` and
    /// `DEALSCAN_TIMEOUT_SECS`, falling back to defaults for everything but
    /// the key. Callers that want `.env` support load it (dotenvy) before
    /// calling this.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout = std::env::var("DEALSCAN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("DEALSCAN_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("DEALSCAN_MODEL").unwrap_or(defaults.model),
            timeout,
        }
    }

    /// Whether a credential is present.
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_has_credential_ignores_whitespace() {
        let config = ModelConfig {
            api_key: "   ".to_string(),
            ..Default::default()
        };
        assert!(!config.has_credential());

        let config = ModelConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        };
        assert!(config.has_credential());
    }
}
