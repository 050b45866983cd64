// GitHub API endpoint functions.
// Typed methods for the two endpoints the site generator uses.

use serde_json::Value;

use crate::error::{Result, SiteError};

use super::client::GitHubClient;
use super::types::LanguageBreakdown;

impl GitHubClient {
    /// List a user's public repositories (single page).
    ///
    /// Returns the raw JSON array so the caller can persist it verbatim;
    /// a non-array response is rejected here with a clear error.
    pub async fn list_user_repos(&self, user: &str, per_page: u32) -> Result<Value> {
        let endpoint = format!("/users/{}/repos", user);
        let params = [("per_page", per_page.to_string())];
        let response = self.get_with_params(&endpoint, &params).await?;
        let listing: Value = response.json().await?;

        if !listing.is_array() {
            return Err(SiteError::InvalidResponse {
                endpoint,
                detail: "expected a JSON array of repositories".to_string(),
            });
        }
        Ok(listing)
    }

    /// Get the language byte counts for one repository.
    pub async fn get_repo_languages(
        &self,
        user: &str,
        repo: &str,
    ) -> Result<LanguageBreakdown> {
        let response = self
            .get(&format!("/repos/{}/{}/languages", user, repo))
            .await?;
        let breakdown: LanguageBreakdown = response.json().await?;
        Ok(breakdown)
    }
}
