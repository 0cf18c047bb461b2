//! Shared fixtures for end-to-end tests against a mock GitHub API

#![allow(dead_code)]

use std::io;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use mockito::{Matcher, Mock, ServerGuard};
use package_pruner::config::Config;
use secrecy::SecretString;
use serde_json::json;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

pub const ORG: &str = "acme";
pub const TOKEN: &str = "test-token";

/// Builds a configuration pointing at the mock server
pub fn create_test_config(server: &ServerGuard, packages: &[&str], keep: usize, dry_run: bool) -> Config {
    Config {
        dry_run,
        keep: NonZeroUsize::new(keep).unwrap(),
        org: ORG.to_string(),
        packages: packages.iter().map(|p| p.to_string()).collect(),
        token: SecretString::new(TOKEN.to_string()),
        api_url: server.url(),
    }
}

/// Renders a package versions listing as the GitHub API returns it
pub fn versions_body(versions: &[(u64, &[&str])]) -> String {
    let entries: Vec<serde_json::Value> = versions
        .iter()
        .map(|(id, tags)| {
            json!({
                "id": id,
                "name": format!("sha256:{:064x}", id),
                "metadata": {
                    "package_type": "container",
                    "container": { "tags": tags }
                }
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

/// Mocks the version listing of `package`
pub async fn mock_listing(server: &mut ServerGuard, package: &str, versions: &[(u64, &[&str])]) -> Mock {
    server
        .mock("GET", format!("/orgs/{}/packages/container/{}/versions", ORG, package).as_str())
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(versions_body(versions))
        .create_async()
        .await
}

/// Mocks a missing package
pub async fn mock_missing(server: &mut ServerGuard, package: &str) -> Mock {
    server
        .mock("GET", format!("/orgs/{}/packages/container/{}/versions", ORG, package).as_str())
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Package not found."}"#)
        .create_async()
        .await
}

/// Mocks the delete endpoint of one version, answering with `status`, expected `hits` times
pub async fn mock_delete(server: &mut ServerGuard, package: &str, id: u64, status: usize, hits: usize) -> Mock {
    server
        .mock(
            "DELETE",
            format!("/orgs/{}/packages/container/{}/versions/{}", ORG, package, id).as_str(),
        )
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header("x-github-api-version", "2022-11-28")
        .with_status(status)
        .expect(hits)
        .create_async()
        .await
}

/// Mocks every delete of `package`, for asserting that none happen
pub async fn mock_any_delete(server: &mut ServerGuard, package: &str) -> Mock {
    server
        .mock(
            "DELETE",
            Matcher::Regex(format!(r"^/orgs/{}/packages/container/{}/versions/\d+$", ORG, package)),
        )
        .with_status(204)
        .expect(0)
        .create_async()
        .await
}

/// Console output captured from the crate's `tracing` events
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Returns the single line carrying `message`
    pub fn line_with(&self, message: &str) -> String {
        let matching: Vec<String> = self
            .lines()
            .into_iter()
            .filter(|line| line.contains(message))
            .collect();
        assert_eq!(matching.len(), 1, "expected one {:?} line in {:?}", message, self.lines());
        matching[0].clone()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs a plain-text subscriber for the current thread at the default `info` level
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("package_pruner=info"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
