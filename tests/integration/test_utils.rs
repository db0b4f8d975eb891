//! Shared test utilities for integration tests
//!
//! Environment isolation for config loading, plus a small content site written
//! as a fixture directory.

use serde_json::{json, Value};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes XDG and FOLIO_* environment access across all integration tests.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    folio_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            folio_env: std::env::var("FOLIO_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("FOLIO_ENV", self.folio_env);
    }
}

fn restore_var(key: &str, value: Option<String>) {
    match value {
        Some(orig) => std::env::set_var(key, orig),
        None => std::env::remove_var(key),
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir`.
///
/// The user-level config file then lives at `<test_dir>/xdg/folio/config.toml`.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("xdg");
    std::fs::create_dir_all(&test_home).unwrap();
    std::fs::create_dir_all(&test_config_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);
    std::env::remove_var("FOLIO_ENV");

    let result = f();

    env_state.restore();

    result
}

fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

pub fn photograph(id: &str, photographer_slug: &str) -> Value {
    json!({
        "id": id,
        "client": format!("Client {}", id),
        "photographer": { "photographer_slug": photographer_slug },
        "p_agency": "Agency",
        "campaign": "Campaign",
        "year": 2021,
        "image_gallery": [{ "image": format!("/uploads/{}.jpg", id) }]
    })
}

pub fn global_settings() -> Value {
    json!({
        "name": "Portfolio",
        "logo": { "src": "/uploads/logo.svg" },
        "menu": [
            { "slug": "about" },
            {
                "slug": "photographers",
                "children": [
                    {
                        "slug": "jane-doe",
                        "children": [
                            { "slug": "second", "photographs": photograph("p2", "jane-doe") },
                            { "slug": "first", "photographs": photograph("p1", "jane-doe") }
                        ]
                    }
                ]
            }
        ],
        "featured_works": [
            { "work": { "id": "w1", "title_es": "Campaña", "title_eng": "Campaign", "permalink": "campaign" } },
            { "work": { "id": "w2", "title_es": "Retrato", "title_eng": "Portrait" } }
        ]
    })
}

pub fn photographers() -> Value {
    json!([
        { "id": "ph1", "name": "Jane Doe", "photographer_slug": "jane-doe", "bio": "Madrid" },
        { "id": "ph2", "name": "John Smith", "photographer_slug": "john-smith" }
    ])
}

pub fn photographs() -> Value {
    json!([
        photograph("p1", "jane-doe"),
        photograph("p3", "john-smith"),
        photograph("p4", "john-smith-2020"),
        photograph("p5", "someone-else")
    ])
}

pub fn contacts() -> Value {
    json!([
        {
            "id": "1",
            "country_es": "Argentina",
            "contact_info": {
                "children": [
                    { "type": "p", "children": [{ "type": "text", "text": "Buenos Aires" }] }
                ]
            }
        }
    ])
}

/// Write a complete content site under `root` in the fixture client's layout.
pub fn write_fixture_site(root: &Path) {
    write_json(
        &root.join("global_settings").join("global-settings.json"),
        &global_settings(),
    );
    write_json(
        &root.join("homepage_hero").join("homepage_hero.json"),
        &json!({ "homepage_hero_logo": { "src": "/uploads/hero.svg" }, "homepage_hero_gallery": [] }),
    );
    write_json(
        &root.join("about").join("about.json"),
        &json!({ "title": "About", "body": "Production studio" }),
    );
    write_json(&root.join("contactConnection.json"), &contacts());
    write_json(&root.join("photographersConnection.json"), &photographers());
    write_json(&root.join("photographsConnection.json"), &photographs());
    write_json(
        &root.join("directorsConnection.json"),
        &json!({ "edges": [{ "node": { "id": "d1", "name": "Ana Ruiz", "director_slug": "ana-ruiz" } }] }),
    );
}
