//! HTTP client for the chat-completions endpoint

use reqwest::Client;
use tracing::{debug, info, warn};

use super::config::CompletionConfig;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionError};

/// Client for the remote completion service
///
/// Holds the endpoint, model and token for the lifetime of the process.
pub struct CompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// The underlying client carries no timeout: a completion call waits
    /// for the remote service however long it takes.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Request `n` completions for a prompt
    ///
    /// Sends one POST with `{model, messages, n}` and a bearer token.
    /// Returns the completion texts in the order the service provided
    /// them. Any status other than 200 becomes `CompletionError::Api`
    /// carrying the status and raw body.
    pub async fn complete(&self, prompt: &str, n: usize) -> Result<Vec<String>, CompletionError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            n,
        };

        debug!(
            "Requesting {} completion(s) from {} (model: {})",
            n, self.config.api_url, self.config.model
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion service returned HTTP {}", status);
            return Err(CompletionError::Api { status, body });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        let completions: Vec<String> = parsed
            .choices
            .into_iter()
            .map(|choice| choice.message.content)
            .collect();

        info!("Received {} completion(s)", completions.len());

        Ok(completions)
    }

    /// Get the configuration
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_client(url: String) -> CompletionClient {
        CompletionClient::new(CompletionConfig {
            api_url: url,
            model: "mixtral-8x7b-32768".to_string(),
            api_token: "test-token".to_string(),
        })
    }

    #[tokio::test]
    async fn test_complete_success_preserves_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-token")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "model": "mixtral-8x7b-32768",
                "n": 2
            })))
            .with_status(200)
            .with_body(
                r#"{"choices": [
                    {"message": {"role": "assistant", "content": "first version"}},
                    {"message": {"role": "assistant", "content": "second version"}}
                ]}"#,
            )
            .create_async()
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.url()));
        let completions = client.complete("some prompt", 2).await.unwrap();

        assert_eq!(completions, vec!["first version", "second version"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":"rate limited"}"#)
            .create_async()
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.url()));
        let err = client.complete("some prompt", 1).await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains(r#"{"error":"rate limited"}"#));
    }

    #[tokio::test]
    async fn test_complete_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = test_client(format!("{}/v1/chat/completions", server.url()));
        let err = client.complete("some prompt", 1).await.unwrap_err();

        assert!(matches!(err, CompletionError::Malformed(_)));
    }
}
