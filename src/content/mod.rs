//! Content extraction module for URL-based topics
//!
//! Fetches a user-supplied page and pulls out its readable text so the
//! prompt can be grounded in real content instead of a bare URL.
//!
//! ## Architecture
//!
//! ```text
//! URL → PageFetcher → HTML → extract_main_content → Clean Text (≤3000 chars)
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::FetchConfig;
pub use extractor::{extract_main_content, truncate_chars};
pub use fetcher::{ExtractionError, PageFetcher};
