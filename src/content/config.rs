//! Configuration for page fetching
//!
//! Defines settings for the HTTP fetch and extraction limits.

use std::env;

/// Configuration for page fetching
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout for the page fetch in seconds (default: 10)
    pub timeout_secs: u64,
    /// Maximum characters of extracted text (default: 3000)
    pub max_chars: usize,
}

impl FetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            max_chars: env::var("FETCH_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        if self.max_chars < 100 {
            return Err("max_chars must be at least 100".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_chars: 3000,
        }
    }
}
