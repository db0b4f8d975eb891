//! Query executor: runs a CMS query and substitutes a fallback on recoverable failure.
//!
//! Strict mode recovers only from missing content records. Development mode also
//! recovers from connection failures so a site can be built while the CMS server
//! is down. Unclassified failures are always returned to the caller.

use crate::classify::{classify, ClassifiedError};
use crate::error::CmsError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::warn;

/// Which failures the executor absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    Strict,
    Development,
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(QueryMode::Strict),
            "development" | "dev" => Ok(QueryMode::Development),
            other => Err(format!(
                "Invalid query mode: '{}' (must be 'strict' or 'development')",
                other
            )),
        }
    }
}

/// Why a fallback was returned instead of the query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    MissingRecord { paths: Vec<String> },
    ConnectionFailure,
}

/// Value produced by the executor, with the recovery that produced it if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub recovered: Option<Recovery>,
}

impl<T> Resolved<T> {
    pub fn is_fallback(&self) -> bool {
        self.recovered.is_some()
    }

    /// Missing content files reported by the failed query, empty otherwise.
    pub fn missing_paths(&self) -> &[String] {
        match &self.recovered {
            Some(Recovery::MissingRecord { paths }) => paths,
            _ => &[],
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Executes CMS queries under a [`QueryMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExecutor {
    mode: QueryMode,
}

impl QueryExecutor {
    pub fn new(mode: QueryMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(QueryMode::Strict)
    }

    pub fn development() -> Self {
        Self::new(QueryMode::Development)
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Run `query`, returning its result or `fallback` when the failure is recoverable.
    pub async fn run<T, F, Fut>(&self, query: F, fallback: T) -> Result<Resolved<T>, CmsError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CmsError>>,
    {
        let error = match query().await {
            Ok(value) => {
                return Ok(Resolved {
                    value,
                    recovered: None,
                })
            }
            Err(error) => error,
        };

        warn!(error = %error, "Query failed");

        match classify(&error) {
            ClassifiedError::MissingRecord { paths } => {
                if paths.is_empty() {
                    warn!("Missing content record reported without file paths");
                } else {
                    warn!(missing_files = ?paths, "Missing content files detected");
                }
                warn!("Using fallback data to prevent build failure");
                Ok(Resolved {
                    value: fallback,
                    recovered: Some(Recovery::MissingRecord { paths }),
                })
            }
            ClassifiedError::ConnectionFailure if self.mode == QueryMode::Development => {
                warn!("Connection error detected - the CMS server is likely not running");
                warn!("Using fallback data for development");
                Ok(Resolved {
                    value: fallback,
                    recovered: Some(Recovery::ConnectionFailure),
                })
            }
            _ => Err(error),
        }
    }

    /// Like [`QueryExecutor::run`], discarding the recovery detail.
    pub async fn execute<T, F, Fut>(&self, query: F, fallback: T) -> Result<T, CmsError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CmsError>>,
    {
        self.run(query, fallback).await.map(Resolved::into_value)
    }
}

/// Strict execution: only missing content records fall back.
pub async fn execute<T, F, Fut>(query: F, fallback: T) -> Result<T, CmsError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, CmsError>>,
{
    QueryExecutor::strict().execute(query, fallback).await
}

/// Development execution: missing records and connection failures fall back.
pub async fn dev_execute<T, F, Fut>(query: F, fallback: T) -> Result<T, CmsError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, CmsError>>,
{
    QueryExecutor::development().execute(query, fallback).await
}
