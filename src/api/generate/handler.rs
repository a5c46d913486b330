// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Generation endpoint handler

use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info, warn};

use super::request::{GenerateRequest, TopicInput};
use super::response::GenerateResponse;
use crate::api::http_server::AppState;
use crate::completion::CompletionError;
use crate::content::truncate_chars;
use crate::prompt::build_prompt;

/// Characters of extracted page text embedded in the query wrapper
const URL_EXCERPT_CHARS: usize = 2000;

/// POST /v1/generate - Generate content for a topic or URL
///
/// # Request
/// - `input`: Topic text, or an HTTP/HTTPS URL to ground the content in
/// - `taskType`, `ageGroup`, `platform`, `style`: configuration choices
/// - `numOutputs`: Number of completions (1-5, default 1)
///
/// # Response
/// - `query`: The query sent to the completion service
/// - `completions`: Generated versions, numbered from 1 in service order
///
/// # Errors
/// - 400 Bad Request: Empty input or out-of-range numOutputs
/// - 502 Bad Gateway: URL fetch/extraction failure, network failure, or a
///   malformed completion response
/// - Other: Non-200 statuses from the completion service pass through with
///   the raw body in the error text
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    debug!("Generate request: {:?}", request.input);

    if let Err(e) = request.validate() {
        warn!("Generate validation failed: {}", e);
        return Err((StatusCode::BAD_REQUEST, e));
    }

    let query = match TopicInput::classify(&request.input) {
        TopicInput::RawTopic(topic) => topic,
        TopicInput::UrlSource(url) => {
            let text = state.fetcher.fetch_page_text(&url).await.map_err(|e| {
                warn!("Extraction failed for {}: {}", url, e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            })?;
            info!("URL content fetched successfully ({} chars)", text.len());
            format!(
                "Based on this content: {}...",
                truncate_chars(&text, URL_EXCERPT_CHARS)
            )
        }
    };

    let prompt = build_prompt(
        &query,
        request.age_group,
        request.task_type,
        request.platform,
        request.style,
    );

    let completions = state
        .completion
        .complete(&prompt, request.num_outputs)
        .await
        .map_err(|e| match &e {
            CompletionError::Api { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                e.to_string(),
            ),
            _ => (StatusCode::BAD_GATEWAY, e.to_string()),
        })?;

    info!("Generated {} completion(s)", completions.len());

    Ok(Json(GenerateResponse::new(query, completions)))
}
