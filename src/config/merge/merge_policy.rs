//! Merge rules: defaults applied beneath every file and environment source.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("cms.source", "http")?
        .set_default("cms.fixtures_dir", "content")?
        .set_default("cms.mode", "strict")?
        .set_default("cms.timeout_secs", 30)?
        .set_default("build.out_dir", "out")?
        .set_default("build.concurrency", 4)
}
