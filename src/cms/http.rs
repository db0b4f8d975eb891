//! GraphQL client for a TinaCMS-compatible content API.

use crate::classify::extract_content_paths;
use crate::cms::{CmsClient, ContentQuery};
use crate::error::{CmsError, SiteError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const CMS_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MISSING_RECORD_MARKER: &str = "Unable to find record";

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

// Transport failures: connect and timeout errors mean the CMS is unreachable.
fn map_http_error(error: reqwest::Error) -> CmsError {
    if error.is_connect() || error.is_timeout() {
        CmsError::Connection(format!("fetch failed: {}", error))
    } else if let Some(status) = error.status() {
        CmsError::Request(format!("Request failed with status {}: {}", status, error))
    } else {
        CmsError::Request(format!("HTTP error: {}", error))
    }
}

/// Turn GraphQL `errors[]` into a structured error.
fn map_graphql_errors(errors: &[GraphQlError]) -> CmsError {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    if message.contains(MISSING_RECORD_MARKER) {
        CmsError::MissingRecord {
            paths: extract_content_paths(&message),
            message,
        }
    } else {
        CmsError::Other(message)
    }
}

pub struct HttpCmsClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpCmsClient {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SiteError> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(CMS_HTTP_CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|e| SiteError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CmsClient for HttpCmsClient {
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError> {
        let request = GraphQlRequest {
            query: query.document(),
            variables: query.variables(),
        };

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request);
        if let Some(token) = &self.token {
            builder = builder.header("X-API-KEY", token);
        }

        let response = builder.send().await.map_err(map_http_error)?;
        let status = response.status();
        debug!(query = %query, status = status.as_u16(), "CMS responded");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Tina reports unresolved documents in the body of a failed request too.
            if error_text.contains(MISSING_RECORD_MARKER) {
                return Err(CmsError::MissingRecord {
                    paths: extract_content_paths(&error_text),
                    message: error_text,
                });
            }
            return Err(CmsError::Request(format!(
                "Request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| CmsError::InvalidPayload(format!("Failed to parse response: {}", e)))?;

        if !body.errors.is_empty() {
            return Err(map_graphql_errors(&body.errors));
        }

        let mut envelope = serde_json::Map::new();
        envelope.insert("data".to_string(), body.data.unwrap_or(Value::Null));
        Ok(Value::Object(envelope))
    }

    fn source_name(&self) -> &str {
        "http"
    }
}
