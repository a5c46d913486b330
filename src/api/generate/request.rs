// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Generation API request types

use serde::{Deserialize, Serialize};

use crate::prompt::{AgeGroup, ContentStyle, Platform, TaskType};

/// Maximum number of completions per request
pub const MAX_OUTPUTS: usize = 5;

/// Request body for POST /v1/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Topic text or a URL to ground the content in
    pub input: String,

    /// Kind of content to produce
    pub task_type: TaskType,

    /// Target audience age group
    pub age_group: AgeGroup,

    /// Target publishing platform
    pub platform: Platform,

    /// Tone of the generated content
    pub style: ContentStyle,

    /// Number of completions to generate (1-5, default 1)
    #[serde(default = "default_num_outputs")]
    pub num_outputs: usize,
}

fn default_num_outputs() -> usize {
    1
}

impl GenerateRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.input.trim().is_empty() {
            return Err("Input cannot be empty".to_string());
        }
        if self.num_outputs < 1 {
            return Err("numOutputs must be at least 1".to_string());
        }
        if self.num_outputs > MAX_OUTPUTS {
            return Err(format!("numOutputs cannot exceed {}", MAX_OUTPUTS));
        }
        Ok(())
    }
}

/// A classified topic input
///
/// Classified once at the boundary; downstream code matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicInput {
    /// Free-form topic text, passed through unchanged
    RawTopic(String),
    /// A web URL whose page content becomes the topic
    UrlSource(String),
}

impl TopicInput {
    /// Classify an input string by its scheme prefix
    pub fn classify(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::UrlSource(input.to_string())
        } else {
            Self::RawTopic(input.to_string())
        }
    }
}
