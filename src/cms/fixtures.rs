//! Local content sources: a JSON fixture directory and an in-memory client.

use crate::cms::{CmsClient, ContentQuery};
use crate::error::CmsError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Wrap an operation result in a response body.
fn envelope(operation: &str, result: Value) -> Value {
    let mut data = serde_json::Map::new();
    data.insert(operation.to_string(), result);
    json!({ "data": data })
}

/// Connection fixtures may be written as a bare list of nodes.
fn as_connection(value: Value) -> Value {
    match value {
        Value::Array(nodes) => json!({
            "edges": nodes.into_iter().map(|node| json!({ "node": node })).collect::<Vec<_>>()
        }),
        other => other,
    }
}

/// Reads content from a directory of JSON documents.
///
/// Layout:
/// - `<root>/<operation>.json` for connections (`{"edges": [...]}` or a list of nodes)
/// - `<root>/<operation>/<relativePath stem>.json` for documents
///
/// A missing document is reported the way the CMS reports it, as a missing
/// `content/<operation>/<relativePath>` record. A missing connection file is an
/// empty collection. A missing root directory is a connection failure.
pub struct FixtureCmsClient {
    root: PathBuf,
}

impl FixtureCmsClient {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn fixture_path(&self, query: &ContentQuery) -> PathBuf {
        match query.relative_path() {
            Some(relative_path) => {
                let stem = Path::new(relative_path)
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| relative_path.to_string());
                self.root
                    .join(query.operation())
                    .join(format!("{}.json", stem))
            }
            None => self.root.join(format!("{}.json", query.operation())),
        }
    }

    /// Read and parse one fixture file; `None` when the file does not exist.
    async fn read_json(path: &Path) -> Result<Option<Value>, CmsError> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CmsError::Other(format!(
                    "Failed to read fixture {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&text).map(Some).map_err(|e| {
            CmsError::InvalidPayload(format!("Invalid fixture {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl CmsClient for FixtureCmsClient {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        let root_is_dir = tokio::fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !root_is_dir {
            return Err(CmsError::Connection(format!(
                "fetch failed: fixture directory {} not found",
                self.root.display()
            )));
        }

        let path = self.fixture_path(query);
        debug!(query = %query, path = %path.display(), "Reading fixture");

        let Some(value) = Self::read_json(&path).await? else {
            return match query.relative_path() {
                Some(relative_path) => Err(CmsError::missing_record(vec![format!(
                    "content/{}/{}",
                    query.operation(),
                    relative_path
                )])),
                None => Ok(envelope(query.operation(), json!({ "edges": [] }))),
            };
        };

        let result = if query.is_connection() {
            as_connection(value)
        } else {
            value
        };
        Ok(envelope(query.operation(), result))
    }

    fn source_name(&self) -> &str {
        "fixtures"
    }
}

/// In-memory client keyed by [`ContentQuery::key`], recording every query it serves.
///
/// Queries with no registered response fail as missing records.
#[derive(Default)]
pub struct StaticCmsClient {
    responses: HashMap<String, Result<Value, CmsError>>,
    calls: Mutex<Vec<String>>,
}

impl StaticCmsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result of `query` (the value under `data.<operation>`).
    pub fn with_result(mut self, query: ContentQuery, result: Value) -> Self {
        let result = if query.is_connection() {
            as_connection(result)
        } else {
            result
        };
        self.responses
            .insert(query.key(), Ok(envelope(query.operation(), result)));
        self
    }

    /// Register a failure for `query`.
    pub fn with_error(mut self, query: ContentQuery, error: CmsError) -> Self {
        self.responses.insert(query.key(), Err(error));
        self
    }

    /// Keys of the queries served so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn was_called(&self, query: &ContentQuery) -> bool {
        let key = query.key();
        self.calls().iter().any(|k| *k == key)
    }
}

#[async_trait]
impl CmsClient for StaticCmsClient {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(query.key());
        match self.responses.get(&query.key()) {
            Some(response) => response.clone(),
            None => Err(CmsError::missing_record(vec![format!(
                "content/{}.md",
                query.operation()
            )])),
        }
    }

    fn source_name(&self) -> &str {
        "static"
    }
}
