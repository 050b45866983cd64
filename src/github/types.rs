// GitHub API response types.
// Defines the decode schema for the listing endpoint and the display
// projection used by the renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Language-to-byte-count breakdown for one repository.
///
/// Insertion order matches the remote response and carries through to
/// rendering, so this is an ordered map rather than a hash map.
pub type LanguageBreakdown = IndexMap<String, u64>;

/// Repository entry as returned by the listing endpoint.
///
/// Only the fields the site needs; everything else in the cached objects is
/// ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
}

/// Display projection of a repository.
///
/// `updated_at` stays a string: the fixed-width ISO-8601 format sorts
/// correctly under lexicographic comparison and is never shown as a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub language: Option<String>,
    pub topics: Vec<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<RawRepo> for RepoRecord {
    fn from(raw: RawRepo) -> Self {
        Self {
            name: raw.name,
            description: raw.description,
            url: raw.html_url,
            language: raw.language,
            topics: raw.topics,
            updated_at: raw.updated_at,
        }
    }
}

/// Outcome of resolving one repository's language breakdown.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageOutcome {
    /// Breakdown loaded from the cache.
    Breakdown(LanguageBreakdown),
    /// Fetch failed and left no cache file; rendered as an empty list.
    Unavailable,
}

impl LanguageOutcome {
    /// Language names in breakdown order, comma-joined.
    pub fn joined_names(&self) -> String {
        match self {
            LanguageOutcome::Breakdown(breakdown) => breakdown
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            LanguageOutcome::Unavailable => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_repo_projection() {
        let json = r#"{
            "name": "demo",
            "description": null,
            "html_url": "https://github.com/endj/demo",
            "language": "Rust",
            "updated_at": "2024-01-01T00:00:00Z",
            "stargazers_count": 7
        }"#;

        let raw: RawRepo = serde_json::from_str(json).unwrap();
        let record = RepoRecord::from(raw);

        assert_eq!(record.name, "demo");
        assert_eq!(record.description, None);
        assert_eq!(record.url, "https://github.com/endj/demo");
        assert_eq!(record.language.as_deref(), Some("Rust"));
        assert!(record.topics.is_empty());
        assert_eq!(record.updated_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_breakdown_preserves_order() {
        let breakdown: LanguageBreakdown =
            serde_json::from_str(r#"{"Go": 120, "Python": 30, "C": 5}"#).unwrap();

        let names: Vec<_> = breakdown.keys().cloned().collect();
        assert_eq!(names, ["Go", "Python", "C"]);
    }

    #[test]
    fn test_joined_names() {
        let breakdown: LanguageBreakdown =
            serde_json::from_str(r#"{"Go": 120, "Python": 30}"#).unwrap();

        assert_eq!(
            LanguageOutcome::Breakdown(breakdown).joined_names(),
            "Go, Python"
        );
        assert_eq!(LanguageOutcome::Unavailable.joined_names(), "");
    }
}
