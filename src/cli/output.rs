//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::classify::{classify, ClassifiedError};
use crate::error::SiteError;

/// Map site errors to a string for CLI output.
/// Connection failures carry a hint, since the usual cause is a CMS server that is not running.
pub fn map_error(e: &SiteError) -> String {
    match e {
        SiteError::Cms(cms) if classify(cms) == ClassifiedError::ConnectionFailure => format!(
            "{}\nIs the CMS server running? Use --fixtures DIR to build from local content.",
            e
        ),
        _ => e.to_string(),
    }
}
