// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod completion;
pub mod content;
pub mod prompt;
pub mod version;

// Re-export main types
pub use api::{
    create_app, start_server, ApiConfig, AppState, GenerateRequest, GenerateResponse, TopicInput,
};
pub use completion::{CompletionClient, CompletionConfig, CompletionError};
pub use content::{extract_main_content, ExtractionError, FetchConfig, PageFetcher};
pub use prompt::{build_prompt, AgeGroup, ContentStyle, Platform, TaskType};
