use std::num::NonZeroUsize;

use secrecy::SecretString;
use thiserror::Error;

use crate::registry::github::DEFAULT_BASE_URL;

pub const DRY_RUN_VAR: &str = "INPUT_DRY_RUN";
pub const KEEP_VAR: &str = "INPUT_KEEP";
pub const ORG_VAR: &str = "GITHUB_REPOSITORY_OWNER";
pub const PACKAGES_VAR: &str = "INPUT_PACKAGES";
pub const TOKEN_VAR: &str = "INPUT_TOKEN";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("INPUT_KEEP must be a positive integer, got {0:?}")]
    InvalidKeep(String),

    #[error("{name} must be a boolean (true/false), got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("INPUT_PACKAGES does not name any package")]
    NoPackages,
}

/// Settings for one pruning run, read once at startup
#[derive(Debug)]
pub struct Config {
    pub dry_run: bool,
    /// Number of most recent versions to keep per package
    pub keep: NonZeroUsize,
    pub org: String,
    pub packages: Vec<String>,
    /// Bearer token; redacted in debug output and zeroized on drop
    pub token: SecretString,
    pub api_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let dry_run = match lookup(DRY_RUN_VAR) {
            Some(value) => parse_bool(DRY_RUN_VAR, &value)?,
            None => false,
        };
        let keep = parse_keep(&required(KEEP_VAR)?)?;
        let org = required(ORG_VAR)?;
        let packages = parse_packages(&required(PACKAGES_VAR)?)?;
        let token = SecretString::new(required(TOKEN_VAR)?);
        let api_url = lookup(API_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            dry_run,
            keep,
            org,
            packages,
            token,
            api_url,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_keep(value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::InvalidKeep(value.to_string()))
}

fn parse_packages(value: &str) -> Result<Vec<String>, ConfigError> {
    let packages: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if packages.is_empty() {
        return Err(ConfigError::NoPackages);
    }
    Ok(packages)
}
