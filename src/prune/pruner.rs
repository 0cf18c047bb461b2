//! Per-package prune flow

use std::num::NonZeroUsize;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::prune::protection::is_protected;
use crate::prune::report::{PruneReport, RunSummary};
use crate::registry::client::Registry;
use crate::registry::error::RegistryError;
use crate::registry::types::{DeleteOutcome, PackageVersion};

/// Returns the versions beyond the retention count, oldest first
///
/// Versions are ordered by id (stable); the `keep` highest ids are retained and
/// every older version is a deletion candidate.
pub fn select_candidates(mut versions: Vec<PackageVersion>, keep: NonZeroUsize) -> Vec<PackageVersion> {
    versions.sort_by_key(|v| v.id);

    let keep = keep.get();
    if versions.len() <= keep {
        return Vec::new();
    }

    let excess = versions.len() - keep;
    versions.truncate(excess);
    versions
}

/// Deletes old versions of container packages from a registry
pub struct Pruner<R> {
    registry: R,
    keep: NonZeroUsize,
    dry_run: bool,
}

impl<R: Registry> Pruner<R> {
    pub fn new(registry: R, keep: NonZeroUsize, dry_run: bool) -> Self {
        Self {
            registry,
            keep,
            dry_run,
        }
    }

    pub fn from_config(registry: R, config: &Config) -> Self {
        Self::new(registry, config.keep, config.dry_run)
    }

    /// Prunes every package in order, stopping at the first fatal error
    pub async fn prune_all<S: AsRef<str>>(&self, packages: &[S]) -> Result<RunSummary, RegistryError> {
        let mut summary = RunSummary::default();
        for package in packages {
            let report = self.prune(package.as_ref()).await?;
            debug!(
                package = %report.package,
                not_found = report.not_found,
                deleted = report.deleted.len(),
                protected = report.protected.len(),
                failed = report.failed.len(),
                "Package processed"
            );
            summary.record(&report);
        }
        Ok(summary)
    }

    /// Prunes a single package
    ///
    /// A package the registry does not know is skipped silently. A rejected delete is
    /// logged and the remaining candidates are still processed; transport errors abort.
    pub async fn prune(&self, package: &str) -> Result<PruneReport, RegistryError> {
        let versions = match self.registry.list_versions(package).await {
            Ok(versions) => versions,
            Err(RegistryError::NotFound(_)) => return Ok(PruneReport::not_found(package)),
            Err(e) => return Err(e),
        };

        let mut report = PruneReport::new(package);

        for version in select_candidates(versions, self.keep) {
            if is_protected(&version.tags) {
                info!(
                    package,
                    version_id = version.id,
                    tags = ?version.tags,
                    "Skip protected version"
                );
                report.protected.push(version.id);
                continue;
            }

            if !self.dry_run
                && let DeleteOutcome::Rejected(status) =
                    self.registry.delete_version(package, version.id).await?
            {
                error!(
                    package,
                    version_id = version.id,
                    status,
                    "Failed to delete package version"
                );
                report.failed.push(version.id);
                continue;
            }

            info!(
                package,
                version_id = version.id,
                dry_run = self.dry_run,
                "Deleted package version"
            );
            report.deleted.push(version.id);
        }

        Ok(report)
    }
}
