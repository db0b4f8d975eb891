//! Layered configuration loading.

use super::test_utils::with_isolated_env;
use folio::config::{CmsSource, ConfigLoader};
use folio::query::QueryMode;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_environment_file_overrides_workspace_file() {
    let temp = TempDir::new().unwrap();
    with_isolated_env(&temp, || {
        let workspace = temp.path().join("site");
        let config_dir = workspace.join("config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[cms]\nsource = \"fixtures\"\nmode = \"strict\"\n\n[build]\nconcurrency = 2\n",
        )
        .unwrap();
        std::fs::write(
            config_dir.join("development.toml"),
            "[cms]\nmode = \"development\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.cms.source, CmsSource::Fixtures);
        assert_eq!(config.cms.mode, QueryMode::Development);
        assert_eq!(config.build.concurrency, 2);
        assert_eq!(config.cms.fixtures_dir, PathBuf::from("content"));
    });
}

#[test]
fn test_empty_workspace_uses_defaults() {
    let temp = TempDir::new().unwrap();
    with_isolated_env(&temp, || {
        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.cms.source, CmsSource::Http);
        assert_eq!(config.cms.mode, QueryMode::Strict);
        assert_eq!(config.cms.timeout_secs, 30);
        assert_eq!(config.logging.output, "stderr");
        assert!(config.validate().is_err(), "http source without endpoint is invalid");
    });
}

#[test]
fn test_invalid_mode_fails_to_load() {
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("site.toml");
    std::fs::write(&config_file, "[cms]\nmode = \"relaxed\"\n").unwrap();
    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
