use clap::Parser;

/// Deletes old container image versions from GitHub Packages.
///
/// Keeps the most recent INPUT_KEEP versions of every package in INPUT_PACKAGES
/// owned by GITHUB_REPOSITORY_OWNER, and never deletes versions whose first tag is
/// `latest` or a release tag. Set INPUT_DRY_RUN=true to only log what would be deleted.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();

    package_pruner::runner::run().await
}
