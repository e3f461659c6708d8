use proptest::prelude::*;

use slidesmith::model::{LayoutCatalog, PresentationPlan};
use slidesmith::pipeline::{run_pipeline, segment, PipelineOptions};

mod common;
mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn catalog_json_roundtrip_is_lossless(catalog in proptest_helpers::arb_catalog(4, 6)) {
        let json = serde_json::to_string_pretty(&catalog).expect("serialize catalog");
        let restored: LayoutCatalog = serde_json::from_str(&json).expect("parse catalog");

        prop_assert_eq!(catalog, restored);
    }

    #[test]
    fn plan_json_roundtrip_preserves_placeholder_order(plan in proptest_helpers::arb_plan(4, 5)) {
        let json = serde_json::to_string_pretty(&plan).expect("serialize plan");
        let restored: PresentationPlan = serde_json::from_str(&json).expect("parse plan");

        prop_assert_eq!(plan, restored);
    }

    #[test]
    fn segmentation_preserves_chunk_count_and_order(
        texts in proptest_helpers::arb_chunk_texts(6)
    ) {
        let markdown = texts.join("\n---\n");
        let chunks = segment(&markdown);

        prop_assert_eq!(chunks.len(), texts.len());
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index, i);
            prop_assert_eq!(&chunk.text, &texts[i]);
        }
    }

    #[test]
    fn pipeline_emits_one_slide_per_chunk(
        texts in proptest_helpers::arb_chunk_texts(6),
        catalog in proptest_helpers::arb_catalog(4, 6),
    ) {
        let markdown = texts.join("\n---\n");
        let options = PipelineOptions {
            images_dir: "unused".into(),
            generate_images: false,
        };

        let (plan, _report) = run_pipeline(
            &common::EchoPlanner,
            &common::FailingImages,
            &markdown,
            &catalog,
            &options,
        );

        prop_assert_eq!(plan.slides.len(), texts.len());
    }
}
