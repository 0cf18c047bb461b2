//! Registry trait for listing and deleting container package versions

use crate::registry::error::RegistryError;
use crate::registry::types::{DeleteOutcome, PackageVersion};

/// Trait for a registry that hosts versioned container packages
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Lists the versions of a package, in the order the registry returns them
    ///
    /// # Arguments
    /// * `package_name` - The container package name (e.g., "ort" or "ort/base")
    ///
    /// # Returns
    /// * `Ok(Vec<PackageVersion>)` - Up to one page of versions
    /// * `Err(RegistryError::NotFound)` - If the package does not exist
    /// * `Err(RegistryError)` - If the request or response fails otherwise
    async fn list_versions(&self, package_name: &str) -> Result<Vec<PackageVersion>, RegistryError>;

    /// Deletes a single package version
    ///
    /// A non-success status is reported as `DeleteOutcome::Rejected`, not as an error.
    /// Only transport-level failures return `Err`.
    async fn delete_version(
        &self,
        package_name: &str,
        version_id: u64,
    ) -> Result<DeleteOutcome, RegistryError>;
}
