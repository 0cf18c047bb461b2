use anyhow::Context;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use crate::config::Config;
use crate::log::init;
use crate::prune::{Pruner, RunSummary};
use crate::registry::GitHubRegistry;

/// Loads the configuration from the environment and prunes every configured package.
pub async fn run() -> anyhow::Result<()> {
    init()?;

    let config = Config::from_env().context("Invalid configuration")?;
    run_with_config(&config).await?;

    Ok(())
}

/// Prunes every package named in `config` against the GitHub Packages API.
pub async fn run_with_config(config: &Config) -> anyhow::Result<RunSummary> {
    info!(
        dry_run = config.dry_run,
        keep = config.keep.get(),
        org = %config.org,
        packages = ?config.packages,
        "Starting package pruning"
    );
    if config.dry_run {
        warn!("Dry run is enabled, no package versions will be deleted");
    }

    let registry = GitHubRegistry::new(&config.api_url, &config.org, config.token.expose_secret())
        .context("Failed to create GitHub API client")?;
    let pruner = Pruner::from_config(registry, config);

    let summary = pruner
        .prune_all(&config.packages)
        .await
        .context("Package pruning aborted")?;

    info!(
        packages = summary.packages,
        not_found = summary.not_found,
        deleted = summary.deleted,
        protected = summary.protected,
        failed = summary.failed,
        "Package pruning finished"
    );

    Ok(summary)
}
