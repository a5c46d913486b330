//! HTTP page fetching with a bounded timeout
//!
//! Fetches the page behind a user-supplied URL and hands the HTML to the
//! extractor. One GET per request, no retries, no caching.

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::config::FetchConfig;
use super::extractor::extract_main_content;

/// Errors that can occur while fetching and extracting page content
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Network failure, timeout, or unreadable response body
    #[error("Error fetching URL content: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Error fetching URL content: HTTP {status} for {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// URL that was fetched
        url: String,
    },

    /// The document parsed but contained no text
    #[error("could not extract main content from the webpage")]
    NoContent,
}

/// Page fetcher wrapping a reqwest client with a fixed timeout
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
}

impl PageFetcher {
    /// Create a new page fetcher
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Mozilla/5.0 (compatible; ContentgenBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch a page and return its extracted main text
    ///
    /// Performs one GET bounded by the configured timeout, selects the
    /// main content region and returns at most `max_chars` characters.
    pub async fn fetch_page_text(&self, url: &str) -> Result<String, ExtractionError> {
        debug!("Fetching page content from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExtractionError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractionError::Http(e.to_string()))?;

        let text = extract_main_content(&html, self.config.max_chars)
            .ok_or(ExtractionError::NoContent)?;

        info!("Extracted {} chars from: {}", text.len(), url);

        Ok(text)
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
