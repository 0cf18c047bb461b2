//! Registry layer
//! - error.rs: Registry error type
//! - types.rs: Package version records and delete outcomes
//! - client.rs: Registry trait definition
//! - github.rs: GitHub Packages REST API

pub mod client;
pub mod error;
pub mod github;
pub mod types;

pub use client::Registry;
pub use error::RegistryError;
pub use github::GitHubRegistry;
pub use types::{DeleteOutcome, PackageVersion};
