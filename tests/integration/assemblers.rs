//! Page assembler behavior against an in-memory CMS.

use super::test_utils;
use folio::cms::payload::GlobalSettings;
use folio::cms::{ContentQuery, StaticCmsClient};
use folio::error::CmsError;
use folio::pages::{
    assemble_home, assemble_photographer, lookup_director, photographer_paths, PageOutcome,
    SiteContext,
};
use folio::query::QueryExecutor;
use serde_json::json;
use std::sync::Arc;

fn full_site() -> StaticCmsClient {
    StaticCmsClient::new()
        .with_result(ContentQuery::global_settings(), test_utils::global_settings())
        .with_result(
            ContentQuery::homepage_hero(),
            json!({ "homepage_hero_logo": { "src": "/hero.svg" } }),
        )
        .with_result(ContentQuery::about(), json!({ "title": "About" }))
        .with_result(ContentQuery::ContactConnection, test_utils::contacts())
        .with_result(ContentQuery::PhotographersConnection, test_utils::photographers())
        .with_result(ContentQuery::PhotographsConnection, test_utils::photographs())
}

fn context(client: &Arc<StaticCmsClient>, executor: QueryExecutor) -> SiteContext {
    SiteContext::new(client.clone(), executor)
}

#[tokio::test]
async fn test_home_uses_featured_list_from_global_settings() {
    let client = Arc::new(full_site());
    let ctx = context(&client, QueryExecutor::strict());

    let props = assemble_home(&ctx).await.unwrap();

    let ids: Vec<&str> = props.works_data.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2"]);
    assert!(props.works_data.iter().all(|w| w.featured_work));
    assert_eq!(props.featured().len(), 2);
    assert_eq!(props.works_data[0].permalink, "campaign");
    assert_eq!(props.works_data[1].permalink, "");
    assert_eq!(props.gs_data.name.as_deref(), Some("Portfolio"));
    assert_eq!(props.about_data.fields["title"], "About");
    assert_eq!(props.contacts_data.len(), 1);
    assert!(!client.was_called(&ContentQuery::WorksConnection));
}

#[tokio::test]
async fn test_home_with_missing_content_renders_fallbacks() {
    let client = Arc::new(StaticCmsClient::new().with_result(
        ContentQuery::WorksConnection,
        json!([{ "id": "w9", "title_es": "Archivo" }]),
    ));
    let ctx = context(&client, QueryExecutor::strict());

    let props = assemble_home(&ctx).await.unwrap();

    assert_eq!(
        props.gs_data.name.as_deref(),
        Some(GlobalSettings::FALLBACK_NAME)
    );
    assert_eq!(props.gs_data.menu.as_deref().map(|m| m.len()), Some(0));
    assert!(client.was_called(&ContentQuery::WorksConnection));
    assert_eq!(props.works_data.len(), 1);
    assert_eq!(props.works_data[0].title_es, "Archivo");
    assert!(props.hh_data.homepage_hero_logo.is_none());
    assert!(props.about_data.fields.is_empty());
    assert!(props.contacts_data.is_empty());
}

#[tokio::test]
async fn test_contact_scenario_is_fully_defaulted() {
    let client = Arc::new(full_site());
    let ctx = context(&client, QueryExecutor::strict());

    let props = assemble_home(&ctx).await.unwrap();
    let contact = serde_json::to_value(&props.contacts_data[0]).unwrap();

    assert_eq!(
        contact,
        json!({
            "id": "1",
            "country_es": "Argentina",
            "country_en": "",
            "contact_info": [
                { "type": "p", "children": [{ "type": "text", "text": "Buenos Aires" }] }
            ],
            "contact_info_en": []
        })
    );
}

#[tokio::test]
async fn test_connection_failure_is_fatal_in_strict_mode_only() {
    let failing = || {
        full_site().with_error(
            ContentQuery::ContactConnection,
            CmsError::Other("TypeError: fetch failed (connect ECONNREFUSED 127.0.0.1:4001)".to_string()),
        )
    };

    let strict_client = Arc::new(failing());
    let strict = context(&strict_client, QueryExecutor::strict());
    assert!(assemble_home(&strict).await.is_err());

    let dev_client = Arc::new(failing());
    let dev = context(&dev_client, QueryExecutor::development());
    let props = assemble_home(&dev).await.unwrap();
    assert!(props.contacts_data.is_empty());
    assert_eq!(props.works_data.len(), 2);
}

#[tokio::test]
async fn test_unclassified_failure_is_fatal_in_development_mode() {
    let client = Arc::new(full_site().with_error(
        ContentQuery::about(),
        CmsError::Other("GraphQL error: Cannot query field \"body\"".to_string()),
    ));
    let ctx = context(&client, QueryExecutor::development());

    let err = assemble_home(&ctx).await.unwrap_err();
    assert!(err.to_string().contains("Cannot query field"));
}

#[tokio::test]
async fn test_photographer_uses_menu_ordering() {
    let client = Arc::new(full_site());
    let ctx = context(&client, QueryExecutor::strict());

    let props = assemble_photographer(&ctx, "jane-doe")
        .await
        .unwrap()
        .found()
        .unwrap();

    assert_eq!(props.photographer.name, "Jane Doe");
    assert_eq!(props.photographer.fields["bio"], "Madrid");
    let ids: Vec<&str> = props.photographs.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
    assert_eq!(props.photographs[0].year, "2021");
    assert!(!client.was_called(&ContentQuery::PhotographsConnection));
}

#[tokio::test]
async fn test_photographer_without_menu_branch_scans_photographs() {
    let client = Arc::new(full_site());
    let ctx = context(&client, QueryExecutor::strict());

    let props = assemble_photographer(&ctx, "john-smith")
        .await
        .unwrap()
        .found()
        .unwrap();

    let ids: Vec<&str> = props.photographs.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p3", "p4"]);
    assert!(client.was_called(&ContentQuery::PhotographsConnection));
}

#[tokio::test]
async fn test_unknown_photographer_is_not_found() {
    let client = Arc::new(full_site());
    let ctx = context(&client, QueryExecutor::strict());

    let outcome = assemble_photographer(&ctx, "jane").await.unwrap();

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "notFound": true })
    );
    assert!(!client.was_called(&ContentQuery::global_settings()));
}

#[tokio::test]
async fn test_missing_photographers_collection_is_not_found() {
    let client = Arc::new(StaticCmsClient::new());
    let ctx = context(&client, QueryExecutor::strict());

    let outcome = assemble_photographer(&ctx, "jane-doe").await.unwrap();
    assert!(matches!(outcome, PageOutcome::NotFound));
    assert!(photographer_paths(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_paths_and_director_lookup() {
    let client = Arc::new(full_site().with_result(
        ContentQuery::DirectorsConnection,
        json!([
            { "id": "d1", "name": "Ana Ruiz", "director_slug": "ana-ruiz" },
            { "id": "d2", "name": "Ana Ruiz Jr", "director_slug": "ana-ruiz-jr" }
        ]),
    ));
    let ctx = context(&client, QueryExecutor::strict());

    assert_eq!(
        photographer_paths(&ctx).await.unwrap(),
        vec!["jane-doe".to_string(), "john-smith".to_string()]
    );

    let director = lookup_director(&ctx, "ana-ruiz").await.unwrap().unwrap();
    assert_eq!(director.id, "d1");
    assert!(lookup_director(&ctx, "ana").await.unwrap().is_none());
}

#[tokio::test]
async fn test_wrong_shaped_contacts_render_empty_section() {
    let client = Arc::new(full_site().with_result(
        ContentQuery::ContactConnection,
        json!("not-a-connection"),
    ));

    for executor in [QueryExecutor::strict(), QueryExecutor::development()] {
        let ctx = context(&client, executor);
        let props = assemble_home(&ctx).await.unwrap();
        assert!(props.contacts_data.is_empty());
        assert_eq!(props.works_data.len(), 2);
    }
}
