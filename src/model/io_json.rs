//! JSON serialization for layout catalogs and presentation plans.
//!
//! Both files are plain JSON records: the catalog is what template analysis
//! hands to the content pipeline, and the plan is what the pipeline hands to
//! the population engine. Keeping them on disk between stages makes every
//! stage independently rerunnable.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{LayoutCatalog, PresentationPlan};
use crate::error::SlidesmithError;

/// Reads a layout catalog from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_catalog(path: &Path) -> Result<LayoutCatalog, SlidesmithError> {
    let file = File::open(path).map_err(SlidesmithError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SlidesmithError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a layout catalog to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_catalog(path: &Path, catalog: &LayoutCatalog) -> Result<(), SlidesmithError> {
    let file = File::create(path).map_err(SlidesmithError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, catalog).map_err(|source| SlidesmithError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a presentation plan from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_plan(path: &Path) -> Result<PresentationPlan, SlidesmithError> {
    let file = File::open(path).map_err(SlidesmithError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SlidesmithError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a presentation plan to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_plan(path: &Path, plan: &PresentationPlan) -> Result<(), SlidesmithError> {
    let file = File::create(path).map_err(SlidesmithError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, plan).map_err(|source| SlidesmithError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}
