//! The content pipeline: segmenting, planning, asset resolution, design.
//!
//! The pipeline is a linear sequence of per-chunk transformations,
//! `Chunk -> Intent -> (Intent, Asset) -> FinalSlide`, each independently
//! testable. [`run_pipeline`] sequences them strictly in chunk order;
//! iterations never overlap and share nothing but the accumulating output.
//!
//! Failure policy: a chunk whose planning or design fails gets the
//! deterministic fallback slide and the run continues. Image generation is
//! best-effort and never fails a chunk. Every recovery is recorded in the
//! [`PipelineReport`].

pub mod report;
mod segment;

pub use report::{PipelineIssue, PipelineIssueCode, PipelineReport, PipelineSeverity};
pub use segment::segment;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{
    ContentChunk, FinalSlide, LayoutCatalog, PresentationPlan, ResolvedAsset, SlideIntent,
};
use crate::services::{ImageGenerator, ServiceError, SlidePlanner};

/// An error from one pipeline stage, recovered by the orchestrator.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("service call failed: {0}")]
    Service(#[from] ServiceError),

    #[error("response does not match the {schema} schema: {message}")]
    Schema {
        schema: &'static str,
        message: String,
    },

    #[error("{0}")]
    Contract(String),

    #[error("failed to persist asset: {0}")]
    Persist(#[from] std::io::Error),
}

/// Options for a pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Directory generated images are persisted under.
    pub images_dir: PathBuf,

    /// When false, the asset-resolution stage is skipped entirely and
    /// slides are designed without images.
    pub generate_images: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            generate_images: true,
        }
    }
}

/// Interprets one chunk into a validated slide intent.
///
/// The service response is validated against the `SlideIntent` schema, plus
/// the invariant that an image request is only present when the content kind
/// expects imagery.
pub fn plan_chunk(
    planner: &dyn SlidePlanner,
    chunk: &ContentChunk,
    catalog: &LayoutCatalog,
) -> Result<SlideIntent, StageError> {
    let value = planner.plan_slide(chunk, catalog)?;

    let intent: SlideIntent = serde_json::from_value(value).map_err(|source| StageError::Schema {
        schema: "SlideIntent",
        message: source.to_string(),
    })?;

    if intent.image_request.is_some() && !intent.kind.expects_image() {
        return Err(StageError::Contract(format!(
            "image request present but content kind is {:?}",
            intent.kind
        )));
    }

    Ok(intent)
}

/// Generates and persists the intent's requested image, if any.
///
/// Returns `Ok(None)` (with no side effects) when the intent carries no
/// image request. The orchestrator treats an `Err` as "proceed without an
/// image": asset resolution is best-effort by contract.
pub fn resolve_asset(
    generator: &dyn ImageGenerator,
    intent: &SlideIntent,
    images_dir: &Path,
    chunk_index: usize,
) -> Result<Option<ResolvedAsset>, StageError> {
    let Some(request) = &intent.image_request else {
        return Ok(None);
    };

    let bytes = generator.generate(&request.prompt)?;

    fs::create_dir_all(images_dir)?;
    let file_name = format!("slide_{}_{}.png", chunk_index + 1, slug(&intent.topic));
    let path = images_dir.join(file_name);
    fs::write(&path, bytes)?;

    log::info!("generated image saved to {}", path.display());
    Ok(Some(ResolvedAsset { path }))
}

/// Binds an intent and optional asset to a validated final slide.
///
/// The service response is validated against the `FinalSlide` schema, and
/// the returned layout name must be present in the catalog; anything else is
/// a data-contract violation, never silently coerced into another layout.
pub fn design_chunk(
    planner: &dyn SlidePlanner,
    intent: &SlideIntent,
    asset: Option<&ResolvedAsset>,
    catalog: &LayoutCatalog,
) -> Result<FinalSlide, StageError> {
    let value = planner.design_slide(intent, asset, catalog)?;

    let slide: FinalSlide = serde_json::from_value(value).map_err(|source| StageError::Schema {
        schema: "FinalSlide",
        message: source.to_string(),
    })?;

    if !catalog.contains_layout(&slide.layout) {
        return Err(StageError::Contract(format!(
            "layout '{}' is not in the catalog",
            slide.layout
        )));
    }

    Ok(slide)
}

/// Builds the deterministic fallback slide for a chunk.
///
/// Layout preference: `"Title and Content"` when the catalog has it, else
/// the catalog's second layout (the first is typically title-only), else the
/// first. The chunk's first line, stripped of leading `#` marks, becomes the
/// title; the remaining lines become the body.
pub fn fallback_slide(chunk: &ContentChunk, catalog: &LayoutCatalog) -> FinalSlide {
    let layout = catalog
        .layout("Title and Content")
        .or_else(|| catalog.layouts.get(1))
        .or_else(|| catalog.layouts.first());

    let (layout_name, title_name, body_name) = match layout {
        Some(layout) => {
            let title = layout
                .placeholders
                .iter()
                .find(|p| p.to_lowercase().contains("title"))
                .or_else(|| layout.placeholders.first())
                .cloned()
                .unwrap_or_else(|| "Title 1".to_string());
            let body = layout
                .placeholders
                .iter()
                .find(|p| {
                    let p = p.to_lowercase();
                    p.contains("content") || p.contains("body")
                })
                .or_else(|| layout.placeholders.get(1))
                .or_else(|| layout.placeholders.first())
                .cloned()
                .unwrap_or_else(|| "Content Placeholder 2".to_string());
            (layout.name.clone(), title, body)
        }
        None => (
            "Title and Content".to_string(),
            "Title 1".to_string(),
            "Content Placeholder 2".to_string(),
        ),
    };

    let mut lines = chunk.text.lines();
    let title = lines
        .next()
        .unwrap_or_default()
        .trim_start_matches('#')
        .trim()
        .to_string();
    let body: Vec<String> = lines
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.trim_start_matches(['-', '*']).trim_start().to_string())
        .collect();

    let mut slide = FinalSlide::new(layout_name).with_placeholder(title_name.clone(), title);
    if body_name != title_name {
        slide = slide.with_placeholder(body_name, body);
    }
    slide
}

/// Runs the whole content pipeline over a markdown document.
///
/// Produces exactly one final slide per chunk, in chunk order, plus the
/// accumulated diagnostics. Only the per-chunk fallback policy stands
/// between a chunk and the output; nothing here aborts the run.
pub fn run_pipeline(
    planner: &dyn SlidePlanner,
    images: &dyn ImageGenerator,
    markdown: &str,
    catalog: &LayoutCatalog,
    options: &PipelineOptions,
) -> (PresentationPlan, PipelineReport) {
    let chunks = segment(markdown);
    let mut plan = PresentationPlan::default();
    let mut report = PipelineReport::new();

    log::info!("planning {} chunk(s)", chunks.len());

    for chunk in &chunks {
        let slide = process_chunk(planner, images, chunk, catalog, options, &mut report);
        plan.slides.push(slide);
    }

    (plan, report)
}

fn process_chunk(
    planner: &dyn SlidePlanner,
    images: &dyn ImageGenerator,
    chunk: &ContentChunk,
    catalog: &LayoutCatalog,
    options: &PipelineOptions,
    report: &mut PipelineReport,
) -> FinalSlide {
    let intent = match plan_chunk(planner, chunk, catalog) {
        Ok(intent) => intent,
        Err(err) => {
            log::warn!("chunk {}: planning failed: {err}", chunk.index);
            report.add(PipelineIssue::warning(
                PipelineIssueCode::PlanningFallback,
                err.to_string(),
                chunk.index,
            ));
            return fallback_slide(chunk, catalog);
        }
    };

    let asset = if options.generate_images {
        match resolve_asset(images, &intent, &options.images_dir, chunk.index) {
            Ok(asset) => asset,
            Err(err) => {
                log::warn!("chunk {}: image generation failed: {err}", chunk.index);
                report.add(PipelineIssue::warning(
                    PipelineIssueCode::AssetUnavailable,
                    err.to_string(),
                    chunk.index,
                ));
                None
            }
        }
    } else {
        None
    };

    match design_chunk(planner, &intent, asset.as_ref(), catalog) {
        Ok(slide) => slide,
        Err(err) => {
            log::warn!("chunk {}: design failed: {err}", chunk.index);
            report.add(PipelineIssue::warning(
                PipelineIssueCode::DesignFallback,
                err.to_string(),
                chunk.index,
            ));
            fallback_slide(chunk, catalog)
        }
    }
}

/// Reduces a topic to a filesystem-friendly slug.
fn slug(topic: &str) -> String {
    let mut out = String::with_capacity(topic.len());
    let mut last_was_sep = true;
    for ch in topic.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    let trimmed = out.trim_end_matches('_');
    if trimmed.is_empty() {
        "slide".to_string()
    } else {
        trimmed.to_string()
    }
}
