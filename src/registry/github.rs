//! GitHub Packages REST API implementation
//!
//! Reference: https://docs.github.com/en/rest/packages/packages?apiVersion=2022-11-28

use reqwest::{StatusCode, Url};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::registry::client::Registry;
use crate::registry::error::RegistryError;
use crate::registry::types::{DeleteOutcome, PackageVersion};

/// Default base URL for the GitHub REST API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// REST API version sent with every request
const API_VERSION: &str = "2022-11-28";

/// Page size for the version listing; only one page is requested
const PER_PAGE: u32 = 100;

/// Version entry from the package versions endpoint
#[derive(Debug, Deserialize)]
struct VersionResponse {
    id: u64,
    #[serde(default)]
    metadata: Option<VersionMetadata>,
}

#[derive(Debug, Deserialize)]
struct VersionMetadata {
    #[serde(default)]
    container: Option<ContainerMetadata>,
}

#[derive(Debug, Deserialize)]
struct ContainerMetadata {
    #[serde(default)]
    tags: Vec<String>,
}

impl From<VersionResponse> for PackageVersion {
    fn from(response: VersionResponse) -> Self {
        let tags = response
            .metadata
            .and_then(|m| m.container)
            .map(|c| c.tags)
            .unwrap_or_default();
        PackageVersion::new(response.id, tags)
    }
}

/// Registry implementation for container packages owned by a GitHub organization
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: Url,
    org: String,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry for `org`, authenticating with `token`
    pub fn new(base_url: &str, org: &str, token: &str) -> Result<Self, RegistryError> {
        let base_url =
            Url::parse(base_url).map_err(|_| RegistryError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(RegistryError::InvalidUrl(base_url.to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| RegistryError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );

        let client = reqwest::Client::builder()
            .user_agent(concat!("package-pruner/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            org: org.to_string(),
        })
    }

    /// Builds `{base}/orgs/{org}/packages/container/{package}/versions`
    ///
    /// Each value is percent-encoded as one path segment, so a nested container
    /// name like `ort/base` becomes `ort%2Fbase`.
    fn versions_url(&self, package_name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "orgs",
                self.org.as_str(),
                "packages",
                "container",
                package_name,
                "versions",
            ]);
        }
        url
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn list_versions(&self, package_name: &str) -> Result<Vec<PackageVersion>, RegistryError> {
        let mut url = self.versions_url(package_name);
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string());

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let versions: Vec<VersionResponse> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub package versions response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        debug!(
            package = package_name,
            count = versions.len(),
            "Fetched package versions"
        );

        Ok(versions.into_iter().map(PackageVersion::from).collect())
    }

    async fn delete_version(
        &self,
        package_name: &str,
        version_id: u64,
    ) -> Result<DeleteOutcome, RegistryError> {
        let mut url = self.versions_url(package_name);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&version_id.to_string());
        }

        let response = self.client.delete(url.clone()).send().await?;

        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            Ok(DeleteOutcome::Deleted)
        } else {
            debug!("GitHub API rejected delete with status {}: {}", status, url);
            Ok(DeleteOutcome::Rejected(status.as_u16()))
        }
    }
}
