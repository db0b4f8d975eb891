//! Page data assemblers.
//!
//! Each assembler gathers everything one route needs into a single props value.
//! Every CMS call goes through the [`QueryExecutor`] with the fallback for its
//! content type, so secondary content that is missing renders as empty
//! sections. A missing primary entity yields [`PageOutcome::NotFound`].

use crate::cms::payload::{About, Connection, GlobalSettings, HomepageHero};
use crate::cms::{queries, CmsClient};
use crate::error::CmsError;
use crate::normalize::{
    contact_data_array, director_by_slug, featured_from_connection, featured_works,
    menu_photographs, photographer_by_slug, photographer_slugs, photographs_by_photographer,
    work_data_array, ContactRecord, DirectorRecord, PhotographRecord, PhotographerRecord,
    WorkRecord,
};
use crate::query::QueryExecutor;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-build context threaded through every assembler.
#[derive(Clone)]
pub struct SiteContext {
    client: Arc<dyn CmsClient>,
    executor: QueryExecutor,
}

impl SiteContext {
    pub fn new(client: Arc<dyn CmsClient>, executor: QueryExecutor) -> Self {
        Self { client, executor }
    }

    pub fn client(&self) -> &dyn CmsClient {
        self.client.as_ref()
    }

    pub fn executor(&self) -> QueryExecutor {
        self.executor
    }
}

/// Props for a route, or the signal to serve a not-found response.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> PageOutcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageOutcome::NotFound)
    }

    pub fn found(self) -> Option<T> {
        match self {
            PageOutcome::Found(props) => Some(props),
            PageOutcome::NotFound => None,
        }
    }
}

impl<T: Serialize> Serialize for PageOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageOutcome::Found(props) => props.serialize(serializer),
            PageOutcome::NotFound => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("notFound", &true)?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeProps {
    pub works_data: Vec<WorkRecord>,
    pub gs_data: GlobalSettings,
    pub hh_data: HomepageHero,
    pub about_data: About,
    pub contacts_data: Vec<ContactRecord>,
}

impl HomeProps {
    /// Works shown in the featured section.
    pub fn featured(&self) -> Vec<WorkRecord> {
        featured_works(Some(&self.works_data))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotographerProps {
    pub photographer: PhotographerRecord,
    pub gs_data: GlobalSettings,
    pub about_data: About,
    pub contacts_data: Vec<ContactRecord>,
    pub photographs: Vec<PhotographRecord>,
}

async fn global_settings(ctx: &SiteContext) -> Result<GlobalSettings, CmsError> {
    ctx.executor
        .execute(
            || queries::global_settings(ctx.client()),
            GlobalSettings::fallback(),
        )
        .await
}

async fn about(ctx: &SiteContext) -> Result<About, CmsError> {
    ctx.executor
        .execute(|| queries::about(ctx.client()), About::default())
        .await
}

async fn contacts(ctx: &SiteContext) -> Result<Vec<ContactRecord>, CmsError> {
    let contacts = ctx
        .executor
        .execute(
            || queries::contact_connection(ctx.client()),
            Connection::empty(),
        )
        .await?;
    Ok(contact_data_array(Some(&contacts)))
}

/// Home route: featured works, global settings, hero, about, contacts.
///
/// Works come from the featured list in global settings; when settings carry
/// no such list the works collection is used in its stored order.
pub async fn assemble_home(ctx: &SiteContext) -> Result<HomeProps, CmsError> {
    let gs_data = global_settings(ctx).await?;

    let works_data = match gs_data.featured_works.as_deref() {
        Some(featured) => work_data_array(Some(featured)),
        None => {
            debug!("Global settings carry no featured works; reading works collection");
            let works = ctx
                .executor
                .execute(
                    || queries::works_connection(ctx.client()),
                    Connection::empty(),
                )
                .await?;
            work_data_array(Some(&featured_from_connection(&works)))
        }
    };

    let hh_data = ctx
        .executor
        .execute(
            || queries::homepage_hero(ctx.client()),
            HomepageHero::default(),
        )
        .await?;
    let about_data = about(ctx).await?;
    let contacts_data = contacts(ctx).await?;

    Ok(HomeProps {
        works_data,
        gs_data,
        hh_data,
        about_data,
        contacts_data,
    })
}

/// Photographer detail route for `slug`.
///
/// Photographs come from the menu tree when the photographer has a branch
/// there (editorial order); otherwise every photograph whose photographer slug
/// contains `slug` is collected from the photographs collection.
pub async fn assemble_photographer(
    ctx: &SiteContext,
    slug: &str,
) -> Result<PageOutcome<PhotographerProps>, CmsError> {
    let photographer = ctx
        .executor
        .execute(
            || async {
                let photographers = queries::photographers_connection(ctx.client()).await?;
                Ok::<_, CmsError>(photographer_by_slug(Some(&photographers), slug))
            },
            None,
        )
        .await?;

    let Some(photographer) = photographer else {
        info!(slug, "Photographer not found");
        return Ok(PageOutcome::NotFound);
    };

    let gs_data = global_settings(ctx).await?;

    let mut photographs = menu_photographs(&gs_data, &photographer.photographer_slug);
    if photographs.is_empty() {
        debug!(slug, "No menu ordering for photographer; scanning photographs collection");
        let target = photographer.photographer_slug.as_str();
        photographs = ctx
            .executor
            .execute(
                || async {
                    let all = queries::photographs_connection(ctx.client()).await?;
                    Ok::<_, CmsError>(photographs_by_photographer(Some(&all), target))
                },
                Vec::new(),
            )
            .await?;
    }

    let about_data = about(ctx).await?;
    let contacts_data = contacts(ctx).await?;

    Ok(PageOutcome::Found(PhotographerProps {
        photographer,
        gs_data,
        about_data,
        contacts_data,
        photographs,
    }))
}

/// Slugs of every photographer page to generate.
pub async fn photographer_paths(ctx: &SiteContext) -> Result<Vec<String>, CmsError> {
    ctx.executor
        .execute(
            || async {
                let photographers = queries::photographers_connection(ctx.client()).await?;
                Ok::<_, CmsError>(photographer_slugs(Some(&photographers)))
            },
            Vec::new(),
        )
        .await
}

/// Director with exactly `slug`, if any.
pub async fn lookup_director(
    ctx: &SiteContext,
    slug: &str,
) -> Result<Option<DirectorRecord>, CmsError> {
    ctx.executor
        .execute(
            || async {
                let directors = queries::directors_connection(ctx.client()).await?;
                Ok::<_, CmsError>(director_by_slug(Some(&directors), slug))
            },
            None,
        )
        .await
}

/// Contacts only, for listings outside a page build.
pub async fn contact_list(ctx: &SiteContext) -> Result<Vec<ContactRecord>, CmsError> {
    contacts(ctx).await
}
