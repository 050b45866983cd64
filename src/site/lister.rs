// Repository lister.
// Fetches the user's repository listing into the cache and loads the
// display projection from it.

use serde_json::Value;
use tracing::info;

use crate::cache::{paths, store};
use crate::config::{REPOS_PER_PAGE, SiteConfig};
use crate::error::Result;
use crate::github::{GitHubClient, RawRepo, RepoRecord};

/// Fetch the repository listing into the cache unless it is already there.
///
/// Existence is the only cache-hit signal; a present file is never
/// refetched. Fetch and write errors are fatal.
pub async fn ensure_repo_cache(client: &GitHubClient, config: &SiteConfig) -> Result<()> {
    let path = paths::repo_cache_path(&config.base_dir);
    if store::exists(&path) {
        info!("repository listing already cached, skipping fetch");
        return Ok(());
    }

    let listing: Value = client.list_user_repos(&config.user, REPOS_PER_PAGE).await?;
    store::write_json_pretty(&path, &listing)?;
    info!(path = %path.display(), "repository listing cached");

    Ok(())
}

/// Load the cached listing and project it to display records.
///
/// Requires the cache to exist; `ensure_repo_cache` must have run first.
pub fn repo_data(config: &SiteConfig) -> Result<Vec<RepoRecord>> {
    let path = paths::repo_cache_path(&config.base_dir);
    let raw: Vec<RawRepo> = store::read_json(&path)?;
    Ok(raw.into_iter().map(RepoRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use tempfile::TempDir;

    const LISTING: &str = r#"[
        {
            "name": "alpha",
            "description": "first repo",
            "html_url": "https://github.com/endj/alpha",
            "language": "Rust",
            "topics": ["cli", "tools"],
            "updated_at": "2024-01-01T00:00:00Z",
            "fork": false,
            "stargazers_count": 3
        },
        {
            "name": "beta",
            "description": null,
            "html_url": "https://github.com/endj/beta",
            "language": null,
            "updated_at": "2023-05-01T00:00:00Z"
        }
    ]"#;

    #[tokio::test]
    async fn test_ensure_fetches_and_writes() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::with_base_dir(temp_dir.path());

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/endj/repos")
            .match_query(mockito::Matcher::UrlEncoded(
                "per_page".into(),
                "100".into(),
            ))
            .with_status(200)
            .with_body(LISTING)
            .create_async()
            .await;

        let client = GitHubClient::with_base_url(&server.url()).unwrap();
        ensure_repo_cache(&client, &config).await.unwrap();

        mock.assert_async().await;
        assert!(store::exists(&paths::repo_cache_path(&config.base_dir)));
    }

    #[tokio::test]
    async fn test_ensure_skips_when_cached() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::with_base_dir(temp_dir.path());
        store::write_text(&paths::repo_cache_path(&config.base_dir), LISTING).unwrap();

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/endj/repos")
            .match_query(mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GitHubClient::with_base_url(&server.url()).unwrap();
        ensure_repo_cache(&client, &config).await.unwrap();

        // Skip branch taken: no listing request issued
        mock.assert_async().await;
    }

    #[test]
    fn test_repo_data_projection() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::with_base_dir(temp_dir.path());
        store::write_text(&paths::repo_cache_path(&config.base_dir), LISTING).unwrap();

        let records = repo_data(&config).unwrap();
        assert_eq!(records.len(), 2);

        let alpha = &records[0];
        assert_eq!(alpha.name, "alpha");
        assert_eq!(alpha.description.as_deref(), Some("first repo"));
        assert_eq!(alpha.url, "https://github.com/endj/alpha");
        assert_eq!(alpha.language.as_deref(), Some("Rust"));
        assert_eq!(alpha.topics, ["cli", "tools"]);
        assert_eq!(alpha.updated_at, "2024-01-01T00:00:00Z");

        // topics omitted in the source object defaults to empty
        let beta = &records[1];
        assert_eq!(beta.description, None);
        assert!(beta.topics.is_empty());
    }

    #[test]
    fn test_repo_data_requires_cache() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::with_base_dir(temp_dir.path());

        let result = repo_data(&config);
        assert!(matches!(result, Err(SiteError::CacheMissing(_))));
    }
}
