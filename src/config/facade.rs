//! Config loading facade: assembles sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::FolioConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, user-level file, workspace
    /// `config/config.toml`, workspace `config/{FOLIO_ENV}.toml`, `FOLIO__*` env vars.
    pub fn load(workspace_root: &Path) -> Result<FolioConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a single file, skipping the layered lookup.
    pub fn load_from_file(path: &Path) -> Result<FolioConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Path of the user-level config file, when a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn environment() -> Environment {
        Environment::with_prefix("FOLIO")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}
