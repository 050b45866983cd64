// Error types for the site generator.
// Covers GitHub API errors, cache errors, and general failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unexpected response shape from {endpoint}: {detail}")]
    InvalidResponse { endpoint: String, detail: String },

    #[error("Cache file not found: {0}")]
    CacheMissing(PathBuf),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
