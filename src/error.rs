//! Error types for the folio content layer.

use thiserror::Error;

/// Errors raised at the CMS boundary.
///
/// Clients raise the structured variants directly whenever they can tell what
/// went wrong. `Other` carries an untyped message and is classified by text.
#[derive(Debug, Clone, Error)]
pub enum CmsError {
    #[error("{message}")]
    MissingRecord { paths: Vec<String>, message: String },

    #[error("CMS connection failed: {0}")]
    Connection(String),

    #[error("CMS request failed: {0}")]
    Request(String),

    #[error("Invalid CMS payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    Other(String),
}

impl CmsError {
    /// Build a missing-record error with the CMS's own message shape.
    pub fn missing_record(paths: Vec<String>) -> Self {
        let message = format!("Unable to find record {}", paths.join(", "));
        CmsError::MissingRecord { paths, message }
    }

    /// Text of the error, as the CMS reported it.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Site-level errors surfaced by assemblers, the build and the CLI.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("CMS error: {0}")]
    Cms(#[from] CmsError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Build failed: {0}")]
    BuildFailed(String),
}

impl From<config::ConfigError> for SiteError {
    fn from(err: config::ConfigError) -> Self {
        SiteError::ConfigError(err.to_string())
    }
}
