// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion client
//!
//! One POST per generation request against an OpenAI-compatible
//! chat-completions endpoint. No retries, no streaming.

pub mod client;
pub mod config;
pub mod types;

pub use client::CompletionClient;
pub use config::CompletionConfig;
pub use types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionError};
