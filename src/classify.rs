//! Failure classification for CMS queries.
//!
//! Structured `CmsError` variants map straight to a classification. Errors that
//! only carry text go through the message rules below, which mirror the CMS's
//! message contract: a "Unable to find record" marker followed by the
//! `content/<name>.md` files it could not resolve.

use crate::error::CmsError;
use regex::Regex;
use std::sync::LazyLock;

const MISSING_RECORD_MARKER: &str = "Unable to find record";
const CONNECTION_MARKERS: [&str; 2] = ["fetch failed", "ECONNREFUSED"];

static CONTENT_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"content/\S+\.md").unwrap());

/// Outcome of inspecting a failed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedError {
    /// One or more referenced content files are absent. Paths may be empty
    /// when the marker matched but no file token could be extracted.
    MissingRecord { paths: Vec<String> },
    ConnectionFailure,
    Unclassified,
}

/// Classify a CMS error.
pub fn classify(error: &CmsError) -> ClassifiedError {
    match error {
        CmsError::MissingRecord { paths, message } => {
            if paths.is_empty() {
                ClassifiedError::MissingRecord {
                    paths: extract_content_paths(message),
                }
            } else {
                ClassifiedError::MissingRecord {
                    paths: paths.clone(),
                }
            }
        }
        CmsError::Connection(_) => ClassifiedError::ConnectionFailure,
        CmsError::InvalidPayload(_) => ClassifiedError::Unclassified,
        CmsError::Request(message) | CmsError::Other(message) => classify_message(message),
    }
}

/// Legacy text classification for errors with no structured variant.
pub fn classify_message(message: &str) -> ClassifiedError {
    if message.contains(MISSING_RECORD_MARKER) {
        return ClassifiedError::MissingRecord {
            paths: extract_content_paths(message),
        };
    }
    if CONNECTION_MARKERS.iter().any(|m| message.contains(m)) {
        return ClassifiedError::ConnectionFailure;
    }
    ClassifiedError::Unclassified
}

/// All `content/<...>.md` tokens in `message`, in order of appearance.
pub fn extract_content_paths(message: &str) -> Vec<String> {
    CONTENT_PATH_RE
        .find_iter(message)
        .map(|m| m.as_str().to_string())
        .collect()
}
