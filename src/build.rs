//! Static props build.
//!
//! Writes one JSON document per route under the output directory:
//! `index.json` for the home route, `photographers/<slug>.json` per photographer,
//! and a `manifest.json` describing the run.

use crate::error::SiteError;
use crate::pages::{
    assemble_home, assemble_photographer, photographer_paths, PageOutcome, SiteContext,
};
use crate::query::QueryMode;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of one build run; also written as `manifest.json`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub mode: QueryMode,
    /// Files written, relative to the output directory.
    pub pages: Vec<String>,
    /// Photographer slugs that resolved to no record.
    pub not_found: Vec<String>,
    /// Slugs rejected as unsafe file names.
    pub skipped: Vec<String>,
}

pub struct SiteBuilder {
    ctx: SiteContext,
    out_dir: PathBuf,
    concurrency: usize,
}

impl SiteBuilder {
    pub fn new(ctx: SiteContext, out_dir: PathBuf, concurrency: usize) -> Self {
        Self {
            ctx,
            out_dir,
            concurrency: concurrency.max(1),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Assemble every route and write its props.
    ///
    /// Any error that survives the query executor aborts the build; pages
    /// already written stay on disk.
    pub async fn build(&self) -> Result<BuildReport, SiteError> {
        info!(out_dir = %self.out_dir.display(), "Starting site build");
        tokio::fs::create_dir_all(self.out_dir.join("photographers")).await?;

        let mut report = BuildReport {
            generated_at: Utc::now(),
            source: self.ctx.client().source_name().to_string(),
            mode: self.ctx.executor().mode(),
            pages: Vec::new(),
            not_found: Vec::new(),
            skipped: Vec::new(),
        };

        let home = assemble_home(&self.ctx).await?;
        self.write_json("index.json", &home).await?;
        report.pages.push("index.json".to_string());

        let mut seen = HashSet::new();
        let (slugs, skipped): (Vec<String>, Vec<String>) = photographer_paths(&self.ctx)
            .await?
            .into_iter()
            .filter(|slug| {
                let first = seen.insert(slug.clone());
                if !first {
                    debug!(slug = %slug, "Duplicate photographer slug; page already scheduled");
                }
                first
            })
            .partition(|slug| is_safe_slug(slug));
        for slug in &skipped {
            warn!(slug = %slug, "Skipping photographer with unsafe slug");
        }
        report.skipped = skipped;

        let ctx = &self.ctx;
        let outcomes: Vec<_> = stream::iter(slugs)
            .map(|slug| async move {
                let outcome = assemble_photographer(ctx, &slug).await;
                (slug, outcome)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        for (slug, outcome) in outcomes {
            match outcome? {
                PageOutcome::Found(props) => {
                    let relative = format!("photographers/{}.json", slug);
                    self.write_json(&relative, &props).await?;
                    debug!(slug = %slug, photographs = props.photographs.len(), "Wrote photographer page");
                    report.pages.push(relative);
                }
                PageOutcome::NotFound => report.not_found.push(slug),
            }
        }

        self.write_json("manifest.json", &report).await?;
        info!(
            pages = report.pages.len(),
            not_found = report.not_found.len(),
            "Site build complete"
        );
        Ok(report)
    }

    async fn write_json<T: Serialize>(&self, relative: &str, value: &T) -> Result<(), SiteError> {
        let body = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(self.out_dir.join(relative), body).await?;
        Ok(())
    }
}

/// A slug usable as a single file name.
pub fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_control)
}
