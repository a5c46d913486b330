// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use contentgen::{
    api::{start_server, ApiConfig, AppState},
    completion::{CompletionClient, CompletionConfig},
    content::{FetchConfig, PageFetcher},
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GROQ_API_TOKEN and friends from a local .env if present
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Contentgen...\n");
    println!("📦 BUILD VERSION: {}", contentgen::version::VERSION);
    println!();

    let fetch_config = FetchConfig::from_env();
    fetch_config.validate().map_err(anyhow::Error::msg)?;

    let completion_config = CompletionConfig::from_env();
    completion_config.validate().map_err(anyhow::Error::msg)?;

    if completion_config.api_token.is_empty() {
        // Not fatal: the remote service reports the authorization failure
        tracing::warn!("GROQ_API_TOKEN is not set; completion calls will be rejected upstream");
    }

    let api_config = ApiConfig::from_env();

    tracing::info!(
        "Completion model: {} via {}",
        completion_config.model,
        completion_config.endpoint_host()
    );

    let state = AppState {
        fetcher: Arc::new(PageFetcher::new(fetch_config)),
        completion: Arc::new(CompletionClient::new(completion_config)),
    };

    println!("✅ Ready on port {}\n", api_config.port);

    start_server(api_config, state).await
}
