//! CLI parse: clap types for Folio. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio CLI - CMS content layer for the portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Query portfolio content from the CMS and build static page props")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read content from a fixture directory instead of the CMS endpoint
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Query mode (strict or development); overrides cms.mode
    #[arg(long)]
    pub mode: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print home page props as JSON
    Home,
    /// Print photographer page props as JSON
    Photographer {
        /// Photographer slug (exact match)
        slug: String,
    },
    /// List photographer slugs that get a page
    Paths {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the director record for a slug, or null
    Director {
        /// Director slug (exact match)
        slug: String,
    },
    /// Show contacts in one language
    Contacts {
        /// Language (es or en)
        #[arg(long, default_value = "es")]
        lang: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write page props for every route to the output directory
    Build {
        /// Output directory (overrides build.out_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
