//! Configuration for the completion endpoint
//!
//! Endpoint, model and token are explicit values injected into the client;
//! the token is read from the environment once at startup.

use std::env;
use url::Url;

/// Default chat-completions endpoint
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Configuration for the completion client
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL
    pub api_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Bearer token. An empty or wrong token is not rejected locally; it
    /// surfaces as an authorization failure from the remote service.
    pub api_token: String,
}

impl CompletionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("COMPLETION_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_token: env::var("GROQ_API_TOKEN").unwrap_or_default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if Url::parse(&self.api_url).is_err() {
            return Err(format!("invalid completion endpoint URL: {}", self.api_url));
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        Ok(())
    }

    /// Host part of the endpoint, for display without secret material
    pub fn endpoint_host(&self) -> String {
        Url::parse(&self.api_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_config_defaults() {
        let config = CompletionConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, "mixtral-8x7b-32768");
        assert!(config.api_token.is_empty());
    }

    #[test]
    fn test_completion_config_validation() {
        let mut config = CompletionConfig::default();
        assert!(config.validate().is_ok());

        config.api_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api_url = DEFAULT_API_URL.to_string();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_token_is_not_a_validation_error() {
        let config = CompletionConfig {
            api_token: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_host() {
        let config = CompletionConfig::default();
        assert_eq!(config.endpoint_host(), "api.groq.com");
    }
}
