// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Generation API response types

use serde::{Deserialize, Serialize};

/// One generated completion, labeled by position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVersion {
    /// 1-based position, in the order the service returned them
    pub position: usize,
    /// Generated text
    pub text: String,
}

/// Response body for POST /v1/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// The query that was sent downstream (raw topic, or the wrapped
    /// page excerpt for URL inputs)
    pub query: String,

    /// Generated completions in service order
    pub completions: Vec<GeneratedVersion>,
}

impl GenerateResponse {
    /// Build a response, numbering completions from 1
    pub fn new(query: String, texts: Vec<String>) -> Self {
        let completions = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| GeneratedVersion {
                position: i + 1,
                text,
            })
            .collect();

        Self { query, completions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_numbering() {
        let response = GenerateResponse::new(
            "topic".to_string(),
            vec!["first".to_string(), "second".to_string()],
        );

        assert_eq!(response.completions.len(), 2);
        assert_eq!(response.completions[0].position, 1);
        assert_eq!(response.completions[0].text, "first");
        assert_eq!(response.completions[1].position, 2);
    }

    #[test]
    fn test_response_serialization() {
        let response = GenerateResponse::new("topic".to_string(), vec!["text".to_string()]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"query\""));
        assert!(json.contains("\"completions\""));
        assert!(json.contains("\"position\":1"));
    }
}
