// Site renderer.
// Runs the pipeline and assembles the repository list fragment.

use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::github::{GitHubClient, LanguageOutcome, RepoRecord};

use super::{languages, lister};

/// Run the full pipeline and return the rendered list fragment.
///
/// Repositories are sorted by their raw `updated_at` string, newest first;
/// the fixed-width ISO-8601 format makes lexicographic order correct.
pub async fn generate_site(client: &GitHubClient, config: &SiteConfig) -> Result<String> {
    lister::ensure_repo_cache(client, config).await?;
    let by_name = languages::fetch_languages(client, config).await?;
    let mut repos = lister::repo_data(config)?;

    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let items: Vec<String> = repos
        .iter()
        .map(|repo| render_item(repo, &by_name))
        .collect();

    Ok(format!(
        "<h1>This is my website.</h1>\n\
         <h1>Here are some projects.</h1>\n\
         <ul>\n{}\n</ul>\n",
        items.join("\n")
    ))
}

/// Render one repository list item.
///
/// A missing description renders as an empty segment; a repository absent
/// from the aggregation renders with an empty language list.
fn render_item(repo: &RepoRecord, by_name: &HashMap<String, LanguageOutcome>) -> String {
    let description = repo.description.as_deref().unwrap_or("");
    let languages = by_name
        .get(&repo.name)
        .map(LanguageOutcome::joined_names)
        .unwrap_or_default();

    format!(
        r#"<li>
    <a href="{url}" target="_blank" rel="noopener">
        <div class="row">
            <div>
                <b>{name}</b>
                <span> - {description}</span>
            </div>
            <div>
                <span>{languages}</span>
            </div>
        </div>
    </a>
</li>"#,
        url = escape_html(&repo.url),
        name = escape_html(&repo.name),
        description = escape_html(description),
        languages = escape_html(&languages),
    )
}

/// Minimal HTML escaping for interpolated text and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
