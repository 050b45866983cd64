// Language resolver.
// Ensures a per-repository language cache file exists for every listed
// repository, then aggregates the files into one mapping.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cache::{paths, store};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::github::{GitHubClient, LanguageOutcome};

use super::lister;

/// Fetch and cache one repository's language breakdown.
///
/// Any failure (network, decode, write) is logged and swallowed; the
/// repository simply ends up without a cache file and aggregation reports
/// it as unavailable.
pub async fn ensure_language_cache(client: &GitHubClient, config: &SiteConfig, repo_name: &str) {
    if let Err(err) = fetch_and_write(client, config, repo_name).await {
        warn!(repo = repo_name, error = %err, "language fetch failed");
    }
}

async fn fetch_and_write(
    client: &GitHubClient,
    config: &SiteConfig,
    repo_name: &str,
) -> Result<()> {
    let breakdown = client.get_repo_languages(&config.user, repo_name).await?;
    let path = paths::language_path(&config.base_dir, repo_name);
    store::write_json_pretty(&path, &breakdown)?;
    debug!(path = %path.display(), "language cache written");
    Ok(())
}

/// Resolve the language breakdown for every cached repository.
///
/// Repositories without a cache file are backfilled first. A file that is
/// still missing afterwards means the fetch failed and was swallowed; that
/// repository maps to `Unavailable` rather than aborting the aggregation.
/// A file that exists but does not parse is fatal.
pub async fn fetch_languages(
    client: &GitHubClient,
    config: &SiteConfig,
) -> Result<HashMap<String, LanguageOutcome>> {
    let repos = lister::repo_data(config)?;
    let mut by_name = HashMap::with_capacity(repos.len());

    for repo in &repos {
        let path = paths::language_path(&config.base_dir, &repo.name);
        if !store::exists(&path) {
            debug!(repo = %repo.name, "language cache missing, fetching");
            ensure_language_cache(client, config, &repo.name).await;
        }

        let outcome = if store::exists(&path) {
            LanguageOutcome::Breakdown(store::read_json(&path)?)
        } else {
            LanguageOutcome::Unavailable
        };
        by_name.insert(repo.name.clone(), outcome);
    }

    Ok(by_name)
}
