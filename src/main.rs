// repofolio entry point.
// Runs the fetch → cache → render pipeline once and writes index.html.

mod cache;
mod config;
mod error;
mod github;
mod site;

use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::github::GitHubClient;

/// Generate a static HTML page listing a GitHub user's public repositories.
#[derive(Parser, Debug)]
#[command(name = "repofolio", version, about)]
struct Cli {
    /// Discard existing caches and refetch everything.
    #[arg(long)]
    refresh: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        error!(error = %err, "site generation failed");
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::default();

    if cli.refresh {
        info!("refresh requested, invalidating caches");
        cache::store::invalidate_all(&config.base_dir)?;
    }

    let client = GitHubClient::new()?;
    let body = site::generate_site(&client, &config).await?;
    let page = site::site_template(&body);

    let output = cache::paths::output_path(&config.base_dir);
    cache::store::write_text(&output, &page)?;
    info!(path = %output.display(), "website generated");

    Ok(())
}
