// Cache store for reading and writing cached data.
// Handles JSON serialization and filesystem operations. Cache files are
// immutable once written; invalidation is the only refresh path.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, SiteError};

/// Check if a cache file exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Read cached JSON data from a file.
///
/// A missing file is an error here: readers of the repo cache require the
/// listing stage to have run first.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(SiteError::CacheMissing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&contents)?;
    Ok(data)
}

/// Write data to cache as pretty-printed JSON.
pub fn write_json_pretty<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    write_text(path, &json)
}

/// Write raw text to a file (used for the rendered page).
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete a cached file.
pub fn delete(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Delete a cached directory and all contents.
pub fn delete_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Invalidate both caches under the base directory (opt-in refresh).
pub fn invalidate_all(base: &Path) -> Result<()> {
    delete(&super::paths::repo_cache_path(base))?;
    delete_dir(&super::paths::language_dir(base))?;
    Ok(())
}
