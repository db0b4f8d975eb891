//! Domain normalizers: raw CMS payloads to fully-defaulted view records.
//!
//! Every function here is pure and total. Absent input yields an empty result,
//! absent strings become `""`, absent collections become `[]` and absent objects
//! become `null`, so rendering never has to check for missing fields.

use crate::cms::payload::{
    Connection, FeaturedWork, GlobalSettings, MenuItem, PhotographerRef, RawContact,
    RawDirector, RawPhotograph, RawPhotographer, RawWork, RichText,
};
use crate::locale::Language;
use crate::rich_text::{plain_lines, Line};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Menu entry whose children are the photographers.
pub const PHOTOGRAPHERS_MENU_SLUG: &str = "photographers";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: String,
    pub title_eng: String,
    pub title_es: String,
    pub agency: String,
    pub brand: String,
    pub featured_image: Option<Value>,
    pub featured_work: bool,
    pub permalink: String,
    pub video_url: String,
    pub work_director: Option<Value>,
    pub info: Vec<Value>,
    pub info_en: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub country_es: String,
    pub country_en: String,
    pub contact_info: Vec<Value>,
    pub contact_info_en: Vec<Value>,
}

impl ContactRecord {
    pub fn country(&self, language: Language) -> &str {
        language.select(&self.country_es, &self.country_en)
    }

    pub fn info_lines(&self, language: Language) -> Vec<Line> {
        plain_lines(language.select(&self.contact_info, &self.contact_info_en))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotographerRecord {
    pub id: String,
    pub name: String,
    pub photographer_slug: String,
    /// Remaining document fields, passed through to rendering.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotographRecord {
    pub id: String,
    pub client: String,
    pub photographer: Option<PhotographerRef>,
    pub agency: String,
    pub campaign: String,
    pub year: String,
    pub image_gallery: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorRecord {
    pub id: String,
    pub name: String,
    pub director_slug: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// `""` for absent or empty strings.
fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// `None` for absent or explicit-null objects.
fn object(value: &Option<Value>) -> Option<Value> {
    value.clone().filter(|v| !v.is_null())
}

fn blocks(value: &Option<RichText>) -> Vec<Value> {
    value
        .as_ref()
        .and_then(|rich| rich.children.clone())
        .unwrap_or_default()
}

fn year(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn work_record(work: &RawWork) -> WorkRecord {
    WorkRecord {
        id: text(&work.id),
        title_eng: text(&work.title_eng),
        title_es: text(&work.title_es),
        agency: text(&work.agency),
        brand: text(&work.brand),
        featured_image: object(&work.featured_image),
        featured_work: true,
        permalink: text(&work.permalink),
        video_url: text(&work.video_url),
        work_director: object(&work.work_director),
        info: blocks(&work.info_work),
        info_en: blocks(&work.info_work_eng),
    }
}

fn contact_record(contact: &RawContact) -> ContactRecord {
    ContactRecord {
        id: text(&contact.id),
        country_es: text(&contact.country_es),
        country_en: text(&contact.country_en),
        contact_info: blocks(&contact.contact_info),
        contact_info_en: blocks(&contact.contact_info_eng),
    }
}

fn photographer_record(photographer: &RawPhotographer) -> PhotographerRecord {
    PhotographerRecord {
        id: text(&photographer.id),
        name: text(&photographer.name),
        photographer_slug: text(&photographer.photographer_slug),
        fields: photographer.extra.clone(),
    }
}

fn director_record(director: &RawDirector) -> DirectorRecord {
    DirectorRecord {
        id: text(&director.id),
        name: text(&director.name),
        director_slug: text(&director.director_slug),
        fields: director.extra.clone(),
    }
}

/// Flatten a photograph document into its display record.
pub fn photograph_record(photo: &RawPhotograph) -> PhotographRecord {
    PhotographRecord {
        id: text(&photo.id),
        client: text(&photo.client),
        photographer: photo.photographer.clone(),
        agency: text(&photo.p_agency),
        campaign: text(&photo.campaign),
        year: year(&photo.year),
        image_gallery: photo.image_gallery.clone().unwrap_or_default(),
    }
}

/// Featured works list (each entry wraps a `work` document) to work records.
///
/// Entries without a `work` produce an all-default record, flagged featured.
pub fn work_data_array(works: Option<&[FeaturedWork]>) -> Vec<WorkRecord> {
    works
        .unwrap_or_default()
        .iter()
        .map(|entry| work_record(entry.work.as_ref().unwrap_or(&RawWork::default())))
        .collect()
}

/// Wrap a works connection as a featured list, preserving connection order.
pub fn featured_from_connection(works: &Connection<RawWork>) -> Vec<FeaturedWork> {
    works
        .edges
        .iter()
        .flatten()
        .map(|edge| FeaturedWork {
            work: edge.node.clone(),
        })
        .collect()
}

/// Contact connection to contact records. Absent edges produce default records.
pub fn contact_data_array(contacts: Option<&Connection<RawContact>>) -> Vec<ContactRecord> {
    let Some(edges) = contacts.and_then(|c| c.edges.as_ref()) else {
        return Vec::new();
    };
    edges
        .iter()
        .map(|edge| contact_record(edge.node.as_ref().unwrap_or(&RawContact::default())))
        .collect()
}

/// Records flagged `featured_work`, in input order.
pub fn featured_works(works: Option<&[WorkRecord]>) -> Vec<WorkRecord> {
    works
        .unwrap_or_default()
        .iter()
        .filter(|work| work.featured_work)
        .cloned()
        .collect()
}

/// First photographer whose slug equals `slug` exactly.
pub fn photographer_by_slug(
    photographers: Option<&Connection<RawPhotographer>>,
    slug: &str,
) -> Option<PhotographerRecord> {
    photographers?
        .nodes()
        .find(|node| node.photographer_slug.as_deref() == Some(slug))
        .map(photographer_record)
}

/// First director whose slug equals `slug` exactly.
pub fn director_by_slug(
    directors: Option<&Connection<RawDirector>>,
    slug: &str,
) -> Option<DirectorRecord> {
    directors?
        .nodes()
        .find(|node| node.director_slug.as_deref() == Some(slug))
        .map(director_record)
}

/// Every photograph whose photographer slug *contains* `slug`, in connection order.
///
/// Containment, not equality: a search for `jane` also returns photographs of
/// `jane-anne`, unlike [`photographer_by_slug`].
pub fn photographs_by_photographer(
    photographs: Option<&Connection<RawPhotograph>>,
    slug: &str,
) -> Vec<PhotographRecord> {
    let Some(photographs) = photographs else {
        return Vec::new();
    };
    photographs
        .nodes()
        .filter(|photo| {
            photo
                .photographer
                .as_ref()
                .and_then(|p| p.photographer_slug.as_deref())
                .is_some_and(|candidate| !candidate.is_empty() && candidate.contains(slug))
        })
        .map(photograph_record)
        .collect()
}

fn children(item: &MenuItem) -> &[MenuItem] {
    item.children.as_deref().unwrap_or_default()
}

/// Editorially ordered photographs for `slug`, read from the navigation menu.
///
/// Looks for the first `photographers` menu entry, then its child whose slug
/// equals `slug`, and returns that child's works in menu order. Later
/// `photographers` entries are ignored. Works without a `photographs`
/// reference are skipped. Empty when the branch does not exist.
pub fn menu_photographs(settings: &GlobalSettings, slug: &str) -> Vec<PhotographRecord> {
    settings
        .menu
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|item| item.slug.as_deref() == Some(PHOTOGRAPHERS_MENU_SLUG))
        .map(children)
        .unwrap_or_default()
        .iter()
        .find(|child| child.slug.as_deref() == Some(slug))
        .map(|child| {
            children(child)
                .iter()
                .filter_map(|work| work.photographs.as_ref())
                .map(photograph_record)
                .collect()
        })
        .unwrap_or_default()
}

/// Slugs of every photographer with one, for static path generation.
pub fn photographer_slugs(photographers: Option<&Connection<RawPhotographer>>) -> Vec<String> {
    let Some(photographers) = photographers else {
        return Vec::new();
    };
    photographers
        .nodes()
        .filter_map(|node| node.photographer_slug.clone())
        .filter(|slug| !slug.is_empty())
        .collect()
}
