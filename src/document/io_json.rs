//! JSON serialization for template and deck documents.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{DeckDocument, TemplateDocument};
use crate::error::SlidesmithError;

/// Opens a template document read-only.
///
/// # Errors
/// Any failure to open or parse the template is an
/// [`SlidesmithError::InvalidTemplate`]: a template that cannot be read is
/// as unusable as one that parses into nothing.
pub fn read_template(path: &Path) -> Result<TemplateDocument, SlidesmithError> {
    let file = File::open(path).map_err(|source| SlidesmithError::InvalidTemplate {
        path: path.to_path_buf(),
        reason: format!("cannot open template: {source}"),
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SlidesmithError::InvalidTemplate {
        path: path.to_path_buf(),
        reason: format!("cannot parse template: {source}"),
    })
}

/// Writes a generated deck to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_deck(path: &Path, deck: &DeckDocument) -> Result<(), SlidesmithError> {
    let file = File::create(path).map_err(SlidesmithError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, deck).map_err(|source| SlidesmithError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a generated deck back from a JSON file.
pub fn read_deck(path: &Path) -> Result<DeckDocument, SlidesmithError> {
    let file = File::open(path).map_err(SlidesmithError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SlidesmithError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
