//! Typed fetchers: run a [`ContentQuery`] and decode `data.<operation>`.

use crate::cms::payload::{
    About, Connection, GlobalSettings, HomepageHero, RawContact, RawDirector, RawPhotograph,
    RawPhotographer, RawWork,
};
use crate::cms::{CmsClient, ContentQuery};
use crate::error::CmsError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Decode the result of `operation` from a response body.
///
/// An absent or null result decodes to `T::default()`. So does a result of the
/// wrong shape, logged as a warning, so a malformed document renders as empty
/// content instead of failing the page.
pub fn decode<T>(body: &Value, operation: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match body.get("data").and_then(|data| data.get(operation)) {
        None | Some(Value::Null) => {
            debug!(operation, "CMS response carried no result");
            T::default()
        }
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!(operation, error = %e, "CMS result has an unexpected shape; using empty content");
            T::default()
        }),
    }
}

async fn run<T>(client: &dyn CmsClient, query: ContentQuery) -> Result<T, CmsError>
where
    T: DeserializeOwned + Default,
{
    debug!(query = %query, source = client.source_name(), "Running CMS query");
    let body = client.fetch(&query).await?;
    Ok(decode(&body, query.operation()))
}

pub async fn global_settings(client: &dyn CmsClient) -> Result<GlobalSettings, CmsError> {
    run(client, ContentQuery::global_settings()).await
}

pub async fn homepage_hero(client: &dyn CmsClient) -> Result<HomepageHero, CmsError> {
    run(client, ContentQuery::homepage_hero()).await
}

pub async fn about(client: &dyn CmsClient) -> Result<About, CmsError> {
    run(client, ContentQuery::about()).await
}

pub async fn works_connection(client: &dyn CmsClient) -> Result<Connection<RawWork>, CmsError> {
    run(client, ContentQuery::WorksConnection).await
}

pub async fn contact_connection(
    client: &dyn CmsClient,
) -> Result<Connection<RawContact>, CmsError> {
    run(client, ContentQuery::ContactConnection).await
}

pub async fn photographers_connection(
    client: &dyn CmsClient,
) -> Result<Connection<RawPhotographer>, CmsError> {
    run(client, ContentQuery::PhotographersConnection).await
}

pub async fn photographs_connection(
    client: &dyn CmsClient,
) -> Result<Connection<RawPhotograph>, CmsError> {
    run(client, ContentQuery::PhotographsConnection).await
}

pub async fn directors_connection(
    client: &dyn CmsClient,
) -> Result<Connection<RawDirector>, CmsError> {
    run(client, ContentQuery::DirectorsConnection).await
}
