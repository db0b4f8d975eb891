//! Static props build over a fixture site.

use super::test_utils::write_fixture_site;
use folio::build::SiteBuilder;
use folio::cms::{CmsClient, ContentQuery, FixtureCmsClient, StaticCmsClient};
use folio::pages::SiteContext;
use folio::query::{QueryExecutor, QueryMode};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_build_writes_every_route() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("content");
    write_fixture_site(&content);
    let out = temp.path().join("out");

    let client: Arc<dyn CmsClient> = Arc::new(FixtureCmsClient::new(content));
    let builder = SiteBuilder::new(
        SiteContext::new(client, QueryExecutor::strict()),
        out.clone(),
        2,
    );
    let report = builder.build().await.unwrap();

    assert_eq!(
        report.pages,
        vec![
            "index.json".to_string(),
            "photographers/jane-doe.json".to_string(),
            "photographers/john-smith.json".to_string(),
        ]
    );
    assert!(report.not_found.is_empty());
    assert_eq!(report.source, "fixtures");
    assert_eq!(report.mode, QueryMode::Strict);

    let home = read_json(&out.join("index.json"));
    assert_eq!(home["gs_data"]["name"], "Portfolio");
    assert_eq!(home["works_data"].as_array().unwrap().len(), 2);

    let jane = read_json(&out.join("photographers").join("jane-doe.json"));
    assert_eq!(jane["photographer"]["photographer_slug"], "jane-doe");
    assert_eq!(jane["photographs"][0]["id"], "p2");

    let john = read_json(&out.join("photographers").join("john-smith.json"));
    assert_eq!(john["photographs"].as_array().unwrap().len(), 2);

    let manifest = read_json(&out.join("manifest.json"));
    assert_eq!(manifest["mode"], "strict");
    assert_eq!(manifest["pages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_concurrency_does_not_change_output() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("content");
    write_fixture_site(&content);

    let mut outputs = Vec::new();
    for concurrency in [1, 8] {
        let out = temp.path().join(format!("out-{}", concurrency));
        let client: Arc<dyn CmsClient> = Arc::new(FixtureCmsClient::new(content.clone()));
        SiteBuilder::new(
            SiteContext::new(client, QueryExecutor::strict()),
            out.clone(),
            concurrency,
        )
        .build()
        .await
        .unwrap();
        outputs.push((
            std::fs::read(out.join("index.json")).unwrap(),
            std::fs::read(out.join("photographers").join("john-smith.json")).unwrap(),
        ));
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[tokio::test]
async fn test_unsafe_slugs_are_skipped() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let client: Arc<dyn CmsClient> = Arc::new(StaticCmsClient::new().with_result(
        ContentQuery::PhotographersConnection,
        json!([
            { "id": "1", "name": "Escape", "photographer_slug": "../escape" },
            { "id": "2", "name": "Jane", "photographer_slug": "jane" }
        ]),
    ));

    let report = SiteBuilder::new(
        SiteContext::new(client, QueryExecutor::strict()),
        out.clone(),
        4,
    )
    .build()
    .await
    .unwrap();

    assert_eq!(report.skipped, vec!["../escape".to_string()]);
    assert!(out.join("photographers").join("jane.json").exists());
    assert!(!temp.path().join("escape.json").exists());
}

#[tokio::test]
async fn test_duplicate_slugs_build_one_page() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    let client: Arc<dyn CmsClient> = Arc::new(StaticCmsClient::new().with_result(
        ContentQuery::PhotographersConnection,
        json!([
            { "id": "1", "name": "Jane", "photographer_slug": "jane" },
            { "id": "2", "name": "Ana", "photographer_slug": "ana" },
            { "id": "3", "name": "Jane Again", "photographer_slug": "jane" }
        ]),
    ));

    let report = SiteBuilder::new(
        SiteContext::new(client, QueryExecutor::strict()),
        out.clone(),
        4,
    )
    .build()
    .await
    .unwrap();

    assert_eq!(
        report.pages,
        vec![
            "index.json".to_string(),
            "photographers/jane.json".to_string(),
            "photographers/ana.json".to_string(),
        ]
    );
    let jane = read_json(&out.join("photographers").join("jane.json"));
    assert_eq!(jane["photographer"]["id"], "1");
}
