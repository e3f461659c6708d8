#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use slidesmith::model::{
    FinalSlide, LayoutCatalog, LayoutDescriptor, PresentationPlan, SlideValue,
};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,14}"
}

pub fn arb_text() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,3}"
}

pub fn arb_catalog(max_layouts: usize, max_placeholders: usize) -> impl Strategy<Value = LayoutCatalog> {
    let layout = (
        arb_name(),
        prop::collection::vec(arb_name(), 0..max_placeholders),
    )
        .prop_map(|(name, placeholders)| LayoutDescriptor::new(name, placeholders));

    (arb_name(), prop::collection::vec(layout, 1..max_layouts)).prop_map(|(source, layouts)| {
        LayoutCatalog {
            source_template: source,
            layouts,
        }
    })
}

pub fn arb_value() -> impl Strategy<Value = SlideValue> {
    prop_oneof![
        arb_text().prop_map(SlideValue::Text),
        prop::collection::vec(arb_text(), 0..4).prop_map(SlideValue::Lines),
    ]
}

pub fn arb_slide(max_placeholders: usize) -> impl Strategy<Value = FinalSlide> {
    (
        arb_name(),
        prop::collection::vec((arb_name(), arb_value()), 0..max_placeholders),
    )
        .prop_map(|(layout, entries)| {
            let mut slide = FinalSlide::new(layout);
            // Suffix with the entry position so names stay unique without
            // forcing them into sorted order.
            for (i, (name, value)) in entries.into_iter().enumerate() {
                slide = slide.with_placeholder(format!("{name} {i}"), value);
            }
            slide
        })
}

pub fn arb_plan(max_slides: usize, max_placeholders: usize) -> impl Strategy<Value = PresentationPlan> {
    prop::collection::vec(arb_slide(max_placeholders), 0..max_slides)
        .prop_map(|slides| PresentationPlan { slides })
}

/// Chunk texts that survive segmentation verbatim: trimmed, non-empty, and
/// free of separator lines.
pub fn arb_chunk_texts(max_chunks: usize) -> impl Strategy<Value = Vec<String>> {
    let chunk = prop::collection::vec(arb_text(), 1..4).prop_map(|lines| lines.join("\n"));
    prop::collection::vec(chunk, 0..max_chunks)
}
