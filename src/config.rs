//! Configuration System
//!
//! Layered configuration for the content layer: merge-policy defaults, the
//! user-level config file, workspace config files, then `FOLIO__*` environment
//! variables. CLI flags are applied on top by the binary.

use crate::logging::LoggingConfig;
use crate::query::QueryMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

mod facade;
mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
    pub mod workspace_file;
}

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Content source settings
    #[serde(default)]
    pub cms: CmsConfig,

    /// Static build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CmsSource {
    #[default]
    Http,
    Fixtures,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    #[serde(default)]
    pub source: CmsSource,

    /// GraphQL endpoint (http source)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Read-only content token sent as `X-API-KEY`
    #[serde(default)]
    pub token: Option<String>,

    /// Fixture root (fixtures source), relative to the workspace root
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,

    /// Which query failures fall back to empty content
    #[serde(default)]
    pub mode: QueryMode,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            source: CmsSource::default(),
            endpoint: None,
            token: None,
            fixtures_dir: default_fixtures_dir(),
            mode: QueryMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CmsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source == CmsSource::Http {
            match self.endpoint.as_deref() {
                None | Some("") => {
                    return Err("endpoint is required when source is 'http'".to_string())
                }
                Some(endpoint)
                    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") =>
                {
                    return Err(format!(
                        "endpoint must be an http(s) URL, got '{}'",
                        endpoint
                    ))
                }
                Some(_) => {}
            }
        }
        if self.fixtures_dir.as_os_str().is_empty() {
            return Err("fixtures_dir cannot be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated props, relative to the workspace root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Photographer pages assembled at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_concurrency() -> usize {
    4
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            concurrency: default_concurrency(),
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.out_dir.as_os_str().is_empty() {
            return Err("out_dir cannot be empty".to_string());
        }
        if self.concurrency == 0 {
            return Err("concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Cms(String),
    Build(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Cms(msg) => write!(f, "cms: {}", msg),
            ValidationError::Build(msg) => write!(f, "build: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl FolioConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.cms.validate() {
            errors.push(ValidationError::Cms(e));
        }
        if let Err(e) = self.build.validate() {
            errors.push(ValidationError::Build(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
