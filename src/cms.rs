//! CMS boundary
//!
//! The site reads content through [`CmsClient`], a narrow async interface that
//! executes one named [`ContentQuery`] and returns the raw GraphQL response body
//! (`{"data": {...}}`). Two clients ship with the crate: [`HttpCmsClient`] talks
//! to a TinaCMS-compatible GraphQL endpoint, and [`FixtureCmsClient`] reads JSON
//! documents from a local directory for offline builds. Clients raise structured
//! [`CmsError`] variants; typed fetchers in [`queries`] decode the body into the
//! lenient payload shapes of [`payload`].

use crate::config::{CmsConfig, CmsSource};
use crate::error::{CmsError, SiteError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

pub mod fixtures;
pub mod http;
pub mod payload;
pub mod queries;

pub use fixtures::{FixtureCmsClient, StaticCmsClient};
pub use http::HttpCmsClient;

pub const GLOBAL_SETTINGS_PATH: &str = "global-settings.md";
pub const HOMEPAGE_HERO_PATH: &str = "homepage_hero.md";
pub const ABOUT_PATH: &str = "about.md";

/// A named operation against the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentQuery {
    GlobalSettings { relative_path: String },
    HomepageHero { relative_path: String },
    About { relative_path: String },
    WorksConnection,
    ContactConnection,
    PhotographersConnection,
    PhotographsConnection,
    DirectorsConnection,
}

impl ContentQuery {
    pub fn global_settings() -> Self {
        ContentQuery::GlobalSettings {
            relative_path: GLOBAL_SETTINGS_PATH.to_string(),
        }
    }

    pub fn homepage_hero() -> Self {
        ContentQuery::HomepageHero {
            relative_path: HOMEPAGE_HERO_PATH.to_string(),
        }
    }

    pub fn about() -> Self {
        ContentQuery::About {
            relative_path: ABOUT_PATH.to_string(),
        }
    }

    /// Operation name; also the key of the result under `data`.
    pub fn operation(&self) -> &'static str {
        match self {
            ContentQuery::GlobalSettings { .. } => "global_settings",
            ContentQuery::HomepageHero { .. } => "homepage_hero",
            ContentQuery::About { .. } => "about",
            ContentQuery::WorksConnection => "worksConnection",
            ContentQuery::ContactConnection => "contactConnection",
            ContentQuery::PhotographersConnection => "photographersConnection",
            ContentQuery::PhotographsConnection => "photographsConnection",
            ContentQuery::DirectorsConnection => "directorsConnection",
        }
    }

    pub fn relative_path(&self) -> Option<&str> {
        match self {
            ContentQuery::GlobalSettings { relative_path }
            | ContentQuery::HomepageHero { relative_path }
            | ContentQuery::About { relative_path } => Some(relative_path),
            _ => None,
        }
    }

    pub fn is_connection(&self) -> bool {
        self.relative_path().is_none()
    }

    /// Stable lookup key: `operation` or `operation:relativePath`.
    pub fn key(&self) -> String {
        match self.relative_path() {
            Some(path) => format!("{}:{}", self.operation(), path),
            None => self.operation().to_string(),
        }
    }

    /// GraphQL variables for the request.
    pub fn variables(&self) -> Value {
        match self.relative_path() {
            Some(path) => json!({ "relativePath": path }),
            None => json!({}),
        }
    }

    /// GraphQL document for the request.
    pub fn document(&self) -> &'static str {
        match self {
            ContentQuery::GlobalSettings { .. } => documents::GLOBAL_SETTINGS,
            ContentQuery::HomepageHero { .. } => documents::HOMEPAGE_HERO,
            ContentQuery::About { .. } => documents::ABOUT,
            ContentQuery::WorksConnection => documents::WORKS_CONNECTION,
            ContentQuery::ContactConnection => documents::CONTACT_CONNECTION,
            ContentQuery::PhotographersConnection => documents::PHOTOGRAPHERS_CONNECTION,
            ContentQuery::PhotographsConnection => documents::PHOTOGRAPHS_CONNECTION,
            ContentQuery::DirectorsConnection => documents::DIRECTORS_CONNECTION,
        }
    }
}

impl std::fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

/// CMS client trait
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// Execute a query and return the response body, `{"data": {<operation>: ...}}`.
    async fn fetch(&self, query: &ContentQuery) -> Result<Value, CmsError>;

    /// Short name of the content source, for logs and status output.
    fn source_name(&self) -> &str;
}

pub struct CmsClientFactory;

impl CmsClientFactory {
    /// Build the configured client. Relative fixture paths resolve against `workspace_root`.
    pub fn create(
        config: &CmsConfig,
        workspace_root: &Path,
    ) -> Result<Arc<dyn CmsClient>, SiteError> {
        match config.source {
            CmsSource::Http => {
                let endpoint = config.endpoint.clone().ok_or_else(|| {
                    SiteError::ConfigError("cms.endpoint is required for the http source".to_string())
                })?;
                Ok(Arc::new(HttpCmsClient::new(
                    endpoint,
                    config.token.clone(),
                    config.timeout(),
                )?))
            }
            CmsSource::Fixtures => {
                let root = if config.fixtures_dir.is_absolute() {
                    config.fixtures_dir.clone()
                } else {
                    workspace_root.join(&config.fixtures_dir)
                };
                Ok(Arc::new(FixtureCmsClient::new(root)))
            }
        }
    }
}

mod documents {
    pub const GLOBAL_SETTINGS: &str = r#"query global_settings($relativePath: String!) {
  global_settings(relativePath: $relativePath) {
    name
    logo
    menu {
      title
      title_en
      slug
      children {
        title
        slug
        children {
          photographs {
            ... on Photographs {
              id
              client
              campaign
              year
              p_agency
              image_gallery { image }
              photographer { ... on Photographers { id name photographer_slug } }
            }
          }
        }
      }
    }
    featured_works {
      work {
        ... on Works {
          id
          title_eng
          title_es
          agency
          brand
          featured_image
          permalink
          video_url
          work_director { ... on Directors { id name director_slug } }
          info_work
          info_work_eng
        }
      }
    }
  }
}"#;

    pub const HOMEPAGE_HERO: &str = r#"query homepage_hero($relativePath: String!) {
  homepage_hero(relativePath: $relativePath) {
    homepage_hero_logo
    homepage_hero_gallery { image }
  }
}"#;

    pub const ABOUT: &str = r#"query about($relativePath: String!) {
  about(relativePath: $relativePath) {
    about_es
    about_en
    about_image
  }
}"#;

    pub const WORKS_CONNECTION: &str = r#"query worksConnection {
  worksConnection {
    edges {
      node {
        id
        title_eng
        title_es
        agency
        brand
        featured_image
        permalink
        video_url
        work_director { ... on Directors { id name director_slug } }
        info_work
        info_work_eng
      }
    }
  }
}"#;

    pub const CONTACT_CONNECTION: &str = r#"query contactConnection {
  contactConnection {
    edges {
      node { id country_es country_en contact_info contact_info_eng }
    }
  }
}"#;

    pub const PHOTOGRAPHERS_CONNECTION: &str = r#"query photographersConnection {
  photographersConnection {
    edges {
      node { id name photographer_slug }
    }
  }
}"#;

    pub const PHOTOGRAPHS_CONNECTION: &str = r#"query photographsConnection {
  photographsConnection {
    edges {
      node {
        id
        client
        campaign
        year
        p_agency
        image_gallery { image }
        photographer { ... on Photographers { id name photographer_slug } }
      }
    }
  }
}"#;

    pub const DIRECTORS_CONNECTION: &str = r#"query directorsConnection {
  directorsConnection {
    edges {
      node { id name director_slug }
    }
  }
}"#;
}
