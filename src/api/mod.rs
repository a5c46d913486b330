// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
pub mod generate;
pub mod http_server;
pub mod page;

pub use generate::{generate_handler, GeneratedVersion, GenerateRequest, GenerateResponse, TopicInput};
pub use http_server::{create_app, start_server, ApiConfig, AppState, HealthResponse};
pub use page::render_form_page;
