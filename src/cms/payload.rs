//! Raw CMS payload shapes.
//!
//! Every field is optional and deserialized leniently: a value of the wrong
//! type becomes `None` instead of failing the whole document, and a malformed
//! element inside a list becomes an empty element. Normalizers turn these
//! shapes into fully-defaulted records once, at ingestion.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize `T`, treating a type mismatch as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list, treating a non-list as absent and a malformed element as empty.
pub(crate) fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Paginated collection: `{ edges: [{ node }] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: DeserializeOwned"))]
pub struct Connection<N> {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub edges: Option<Vec<Edge<N>>>,
}

impl<N> Default for Connection<N> {
    fn default() -> Self {
        Self { edges: None }
    }
}

impl<N> Connection<N> {
    /// The empty collection used as a query fallback.
    pub fn empty() -> Self {
        Self {
            edges: Some(Vec::new()),
        }
    }

    pub fn from_nodes(nodes: Vec<N>) -> Self {
        Self {
            edges: Some(nodes.into_iter().map(|node| Edge { node: Some(node) }).collect()),
        }
    }

    /// Nodes present in the connection, skipping absent edges.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges
            .iter()
            .flatten()
            .filter_map(|edge| edge.node.as_ref())
    }

    pub fn len(&self) -> usize {
        self.edges.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: DeserializeOwned"))]
pub struct Edge<N> {
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<N>,
}

impl<N> Default for Edge<N> {
    fn default() -> Self {
        Self { node: None }
    }
}

/// Rich-text field: the CMS AST root with its block `children`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, deserialize_with = "lenient")]
    pub children: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<Value>,
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuItem>>,
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub featured_works: Option<Vec<FeaturedWork>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GlobalSettings {
    pub const FALLBACK_NAME: &'static str = "Made in Austria";

    /// Settings used when the global settings document is missing.
    pub fn fallback() -> Self {
        Self {
            name: Some(Self::FALLBACK_NAME.to_string()),
            logo: None,
            menu: Some(Vec::new()),
            featured_works: None,
            extra: Map::new(),
        }
    }
}

/// Navigation tree entry. Photographer entries nest their ordered works,
/// each carrying a `photographs` reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq", skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photographs: Option<RawPhotograph>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedWork {
    #[serde(default, deserialize_with = "lenient")]
    pub work: Option<RawWork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWork {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_eng: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title_es: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub agency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub brand: Option<String>,
    #[serde(default)]
    pub featured_image: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub permalink: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub work_director: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub info_work: Option<RichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub info_work_eng: Option<RichText>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomepageHero {
    #[serde(default)]
    pub homepage_hero_logo: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub homepage_hero_gallery: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// About page document; passed through to rendering as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContact {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_es: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub country_en: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_info: Option<RichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_info_eng: Option<RichText>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPhotographer {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photographer_slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Photographer reference embedded in a photograph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotographerRef {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photographer_slug: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPhotograph {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub photographer: Option<PhotographerRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub p_agency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub campaign: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_gallery: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDirector {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub director_slug: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
