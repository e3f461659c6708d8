//! Placeholder population: writing a presentation plan into a template.
//!
//! For each plan slide, in order: instantiate the named layout, then resolve
//! each placeholder by exact, case-sensitive name and coerce its value by
//! kind. Matching is deliberately simple and predictable; no fuzzy or
//! case-insensitive lookups. Everything that cannot land as planned is
//! recorded in the [`PopulationReport`] and the run continues; population
//! never aborts for one placeholder or one slide.

mod report;

pub use report::{OutcomeCode, PopulationOutcome, PopulationReport, ValueKind};

use std::path::{Path, PathBuf};

use crate::document::{DeckDocument, DeckSlide, ShapeContent, TemplateDocument};
use crate::model::{PresentationPlan, SlideValue};

/// File extensions recognized as image references.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Options for population behavior.
#[derive(Clone, Debug)]
pub struct PopulateOptions {
    /// Directory searched for image files after the literal path.
    pub images_dir: PathBuf,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
        }
    }
}

/// Populates a template from a presentation plan.
///
/// Slides are instantiated strictly in plan order. A slide naming a layout
/// the template lacks is skipped and recorded as `UnknownLayout`; a
/// placeholder naming a shape the slide lacks is skipped and recorded as
/// `UnmatchedPlaceholder`; an image reference whose file cannot be found is
/// written as visible text and recorded as `MissingImageFile`. The deck and
/// the report together account for every slide and every value.
pub fn populate(
    plan: &PresentationPlan,
    template: &TemplateDocument,
    options: &PopulateOptions,
) -> (DeckDocument, PopulationReport) {
    let mut deck = DeckDocument {
        template: template.name.clone(),
        slides: Vec::new(),
    };
    let mut report = PopulationReport::new();

    for (index, planned) in plan.slides.iter().enumerate() {
        let Some(layout) = template.layout(&planned.layout) else {
            log::warn!(
                "slide {}: layout '{}' not found in template, skipping",
                index + 1,
                planned.layout
            );
            report.add(PopulationOutcome::skipped_slide(index));
            continue;
        };

        let mut slide = DeckSlide::from_layout(layout);

        for (name, value) in planned.placeholders.iter() {
            populate_shape(&mut slide, index, name, value, options, &mut report);
        }

        deck.slides.push(slide);
    }

    (deck, report)
}

fn populate_shape(
    slide: &mut DeckSlide,
    slide_index: usize,
    name: &str,
    value: &SlideValue,
    options: &PopulateOptions,
    report: &mut PopulationReport,
) {
    let kind = classify(value);

    let Some(shape) = slide.shape_mut(name) else {
        report.add(PopulationOutcome::unmatched(slide_index, name, kind));
        return;
    };

    match value {
        SlideValue::Lines(lines) => {
            shape.content = ShapeContent::Text {
                paragraphs: lines.clone(),
            };
            report.add(PopulationOutcome::matched(slide_index, name, ValueKind::Lines));
        }
        SlideValue::Text(text) if kind == ValueKind::Image => {
            match resolve_image_path(text, &options.images_dir) {
                Some(path) => {
                    shape.content = ShapeContent::Image {
                        path: path.display().to_string(),
                    };
                    report.add(PopulationOutcome::matched(slide_index, name, ValueKind::Image));
                }
                None => {
                    // Leave a visible trace for the author instead of
                    // dropping the reference.
                    shape.content = ShapeContent::Text {
                        paragraphs: vec![text.clone()],
                    };
                    report.add(PopulationOutcome::missing_image(slide_index, name));
                }
            }
        }
        SlideValue::Text(text) => {
            shape.content = ShapeContent::Text {
                paragraphs: vec![text.clone()],
            };
            report.add(PopulationOutcome::matched(slide_index, name, ValueKind::Text));
        }
    }
}

/// Determines the kind of a planned value.
///
/// A text value counts as an image reference when it is a single-line path
/// with a raster-image extension; the plan format cannot mark image values
/// explicitly.
fn classify(value: &SlideValue) -> ValueKind {
    match value {
        SlideValue::Lines(_) => ValueKind::Lines,
        SlideValue::Text(text) if is_image_reference(text) => ValueKind::Image,
        SlideValue::Text(_) => ValueKind::Text,
    }
}

fn is_image_reference(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.contains('\n') {
        return false;
    }
    Path::new(text)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Resolves an image reference to an existing file.
///
/// Search order: the reference as given, then its file name under the
/// images directory.
fn resolve_image_path(reference: &str, images_dir: &Path) -> Option<PathBuf> {
    let literal = Path::new(reference.trim());
    if literal.is_file() {
        return Some(literal.to_path_buf());
    }

    let fallback = images_dir.join(literal.file_name()?);
    if fallback.is_file() {
        return Some(fallback);
    }

    None
}
