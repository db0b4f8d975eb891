//! CLI route: single route table and run context. Dispatches to assemblers and presentation.

use crate::build::SiteBuilder;
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_build_report, format_contacts, format_paths, to_pretty_json,
};
use crate::cms::CmsClientFactory;
use crate::config::{CmsSource, ConfigLoader, FolioConfig};
use crate::error::SiteError;
use crate::locale::Language;
use crate::pages::{
    assemble_home, assemble_photographer, contact_list, lookup_director, photographer_paths,
    SiteContext,
};
use crate::query::{QueryExecutor, QueryMode};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, resolved config and the async runtime.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: FolioConfig,
    runtime: Runtime,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, SiteError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            workspace_root,
            config,
            runtime,
        })
    }

    /// Read content from `dir` instead of the configured source.
    pub fn with_fixtures(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.config.cms.source = CmsSource::Fixtures;
            self.config.cms.fixtures_dir = dir;
        }
        self
    }

    /// Override `cms.mode`.
    pub fn with_mode(mut self, mode: Option<&str>) -> Result<Self, SiteError> {
        if let Some(mode) = mode {
            self.config.cms.mode = mode.parse::<QueryMode>().map_err(SiteError::ConfigError)?;
        }
        Ok(self)
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SiteError> {
        let started = Instant::now();
        let name = command_name(command);

        if let Err(errors) = self.config.validate() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SiteError::ConfigError(joined));
        }

        let client = CmsClientFactory::create(&self.config.cms, &self.workspace_root)?;
        debug!(command = name, source = client.source_name(), mode = ?self.config.cms.mode, "Dispatching command");
        let ctx = SiteContext::new(client, QueryExecutor::new(self.config.cms.mode));

        let result = self.runtime.block_on(self.execute_inner(command, &ctx));
        info!(
            command = name,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn execute_inner(&self, command: &Commands, ctx: &SiteContext) -> Result<String, SiteError> {
        match command {
            Commands::Home => {
                let props = assemble_home(ctx).await?;
                to_pretty_json(&props)
            }
            Commands::Photographer { slug } => {
                let outcome = assemble_photographer(ctx, slug).await?;
                to_pretty_json(&outcome)
            }
            Commands::Paths { format } => {
                let slugs = photographer_paths(ctx).await?;
                format_paths(&slugs, format)
            }
            Commands::Director { slug } => {
                let director = lookup_director(ctx, slug).await?;
                to_pretty_json(&director)
            }
            Commands::Contacts { lang, format } => {
                let language = lang.parse::<Language>().map_err(SiteError::ConfigError)?;
                let contacts = contact_list(ctx).await?;
                format_contacts(&contacts, language, format)
            }
            Commands::Build { out } => {
                let out_dir = self.resolve_out_dir(out.as_deref());
                let builder = SiteBuilder::new(ctx.clone(), out_dir, self.config.build.concurrency);
                let report = builder.build().await?;
                Ok(format_build_report(
                    &report,
                    &builder.out_dir().display().to_string(),
                ))
            }
        }
    }

    fn resolve_out_dir(&self, cli_out: Option<&Path>) -> PathBuf {
        let out = cli_out.unwrap_or(&self.config.build.out_dir);
        if out.is_absolute() {
            out.to_path_buf()
        } else {
            self.workspace_root.join(out)
        }
    }
}
