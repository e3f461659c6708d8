use std::path::PathBuf;
use thiserror::Error;

use crate::validate::PlanReport;

/// The main error type for slidesmith operations.
///
/// Only conditions that abort a whole run live here. Per-chunk and
/// per-placeholder failures are recovered and surfaced through the pipeline
/// and population reports instead.
#[derive(Debug, Error)]
pub enum SlidesmithError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid template {path}: {reason}")]
    InvalidTemplate { path: PathBuf, reason: String },

    #[error("Plan validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    PlanValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: PlanReport,
    },

    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}
