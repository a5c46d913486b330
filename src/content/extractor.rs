//! HTML content extraction
//!
//! Pulls the readable text out of a fetched page using CSS selectors.

use scraper::{Html, Selector};

/// Extract the main textual content from an HTML document.
///
/// Tries semantic regions in order:
/// 1. `<main>` tag
/// 2. `<article>` tag
/// 3. `<body>` fallback
///
/// Text nodes inside the selected region are trimmed and joined with
/// single spaces, then hard-truncated to `max_chars` characters.
///
/// # Arguments
/// * `html` - Raw HTML string
/// * `max_chars` - Maximum characters to return
///
/// # Returns
/// `Some(text)` with the cleaned, truncated content, or `None` when the
/// document yields no text at all.
pub fn extract_main_content(html: &str, max_chars: usize) -> Option<String> {
    let document = Html::parse_document(html);

    // Priority order of regions to try
    for selector_str in ["main", "article", "body"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = stripped_text(&element);
                if !text.is_empty() {
                    return Some(truncate_chars(&text, max_chars));
                }
            }
        }
    }

    None
}

/// Collect the text nodes of an element, trimmed and space-joined
fn stripped_text(element: &scraper::ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to the first `max_chars` characters, cutting mid-word if needed
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
