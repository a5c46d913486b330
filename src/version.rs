// Version information for Contentgen

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-content-pipeline-2025-08-05";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-05";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "url-extraction",
    "few-shot-prompts",
    "multi-output",
    "form-ui",
];
