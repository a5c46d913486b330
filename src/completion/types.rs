// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Wire types for the chat-completions endpoint

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One chat message in a completion request or response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("user", "assistant", ...)
    pub role: String,
    /// Message text
    pub content: String,
}

/// Request body for the chat-completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages; this client always sends a single user message
    pub messages: Vec<ChatMessage>,
    /// Number of completions to generate
    pub n: usize,
}

/// One returned completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Response body from the chat-completions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices, in server order
    pub choices: Vec<ChatChoice>,
}

/// Errors from the completion service
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Non-200 response; carries the status and the raw body text
    #[error("API Error: {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network-level failure before any status was received
    #[error("completion request failed: {0}")]
    Transport(String),

    /// 200 response whose body did not match the expected shape
    #[error("unexpected completion response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "mixtral-8x7b-32768".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "Why is the sky blue?".to_string(),
            }],
            n: 2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["n"], 2);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 2);
        assert_eq!(response.choices[0].message.content, "first");
        assert_eq!(response.choices[1].message.content, "second");
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "usage": {"total_tokens": 42},
            "choices": [{"index": 0, "finish_reason": "stop",
                         "message": {"role": "assistant", "content": "ok"}}]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, "ok");
    }

    #[test]
    fn test_api_error_display() {
        let error = CompletionError::Api {
            status: 429,
            body: r#"{"error":"rate limited"}"#.to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains(r#"{"error":"rate limited"}"#));
    }
}
