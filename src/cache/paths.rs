// Cache path utilities.
// Constructs the fixed relative file layout under the base directory.

use std::path::{Path, PathBuf};

use crate::config::{LANGUAGE_CACHE_DIR, OUTPUT_FILE, REPO_CACHE_FILE};

/// Path to the repository listing cache file.
pub fn repo_cache_path(base: &Path) -> PathBuf {
    base.join(REPO_CACHE_FILE)
}

/// Path to the per-repository language cache directory.
pub fn language_dir(base: &Path) -> PathBuf {
    base.join(LANGUAGE_CACHE_DIR)
}

/// Path to one repository's language cache file.
pub fn language_path(base: &Path, repo: &str) -> PathBuf {
    language_dir(base).join(format!("{}.json", sanitize_name(repo)))
}

/// Path to the rendered HTML output file.
pub fn output_path(base: &Path) -> PathBuf {
    base.join(OUTPUT_FILE)
}

/// Sanitize a repository name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
