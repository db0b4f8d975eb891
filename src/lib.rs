//! Folio: CMS content layer for a photographer portfolio site
//!
//! Queries a headless CMS, tolerates missing or unreachable content with typed
//! fallbacks, normalizes raw records into the shapes pages render, and writes
//! per-route props as JSON.

pub mod build;
pub mod classify;
pub mod cli;
pub mod cms;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod normalize;
pub mod pages;
pub mod query;
pub mod rich_text;
