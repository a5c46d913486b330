// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring: routes, shared state, startup

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use super::generate::generate_handler;
use super::page::render_form_page;
use crate::completion::CompletionClient;
use crate::content::PageFetcher;
use crate::version;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Port to listen on (default: 8080)
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared per-process state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Fetcher for URL-grounded topics
    pub fetcher: Arc<PageFetcher>,
    /// Client for the completion service
    pub completion: Arc<CompletionClient>,
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
    pub endpoint_host: String,
}

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/v1/generate", post(generate_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until ctrl-c
pub async fn start_server(config: ApiConfig, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to install ctrl-c handler");
    }
}

async fn index_handler() -> Html<String> {
    Html(render_form_page())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.completion.config();
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "contentgen".to_string(),
        version: version::VERSION.to_string(),
        model: config.model.clone(),
        endpoint_host: config.endpoint_host(),
    })
}
