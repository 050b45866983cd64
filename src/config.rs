// Fixed site configuration.
// The account name and file layout are constants; nothing is read from the
// environment at runtime.

use std::path::PathBuf;

/// GitHub account whose repositories are listed.
pub const GITHUB_USER: &str = "endj";

/// Page size for the listing request (single page, no pagination).
pub const REPOS_PER_PAGE: u32 = 100;

/// Repository listing cache file, relative to the base directory.
pub const REPO_CACHE_FILE: &str = "repos.json";

/// Directory holding one language cache file per repository.
pub const LANGUAGE_CACHE_DIR: &str = "languages";

/// Rendered page output file.
pub const OUTPUT_FILE: &str = "index.html";

/// Resolved configuration for one pipeline run.
///
/// The base directory anchors the caches and the output file. It defaults to
/// the working directory; tests point it at a temp dir.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub user: String,
    pub base_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            user: GITHUB_USER.to_string(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    /// Configuration rooted at the given directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }
}
