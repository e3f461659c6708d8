//! Core content model for slidesmith.
//!
//! This module defines the typed representation every stage of the pipeline
//! works through: the layout catalog produced by template analysis, the
//! per-chunk slide intent produced by planning, and the final slide plan
//! consumed by the population engine.
//!
//! # Design Principles
//!
//! 1. **Forward-only data flow**: the catalog is read-only input to every
//!    later stage; intents and final slides are created once and never
//!    mutated.
//!
//! 2. **Order is meaning**: chunk order determines slide order, and the
//!    placeholder mapping of a final slide preserves insertion order all the
//!    way to the serialized plan file.
//!
//! 3. **Permissive construction**: types allow data that validation may later
//!    reject (e.g. a plan naming an unknown layout), so problems surface in
//!    reports rather than panics while parsing.

mod catalog;
pub mod io_json;
mod slide;

pub use catalog::{LayoutCatalog, LayoutDescriptor};
pub use slide::{
    ContentChunk, ContentKind, FinalSlide, ImageRequest, PlaceholderValues, PresentationPlan,
    ResolvedAsset, SlideIntent, SlideValue,
};
