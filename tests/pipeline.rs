use serde_json::json;

use slidesmith::model::{LayoutCatalog, LayoutDescriptor, SlideValue};
use slidesmith::pipeline::{run_pipeline, PipelineIssueCode, PipelineOptions};

mod common;

use common::{EchoPlanner, FailingImages, ScriptedPlanner, StaticImages};

fn catalog() -> LayoutCatalog {
    LayoutCatalog {
        source_template: "test.template.json".to_string(),
        layouts: vec![
            LayoutDescriptor::new(
                "Title Slide",
                vec!["Title 1".to_string(), "Subtitle 2".to_string()],
            ),
            LayoutDescriptor::new(
                "Title and Content",
                vec!["Title 1".to_string(), "Content Placeholder 2".to_string()],
            ),
        ],
    }
}

fn no_image_options() -> PipelineOptions {
    PipelineOptions {
        images_dir: "unused".into(),
        generate_images: false,
    }
}

#[test]
fn one_slide_per_chunk_in_chunk_order() {
    let markdown = "# First\none\n---\n# Second\ntwo\n---\n# Third\nthree";

    let (plan, report) = run_pipeline(
        &EchoPlanner,
        &FailingImages,
        markdown,
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 3);
    assert!(report.is_clean());

    let titles: Vec<_> = plan
        .slides
        .iter()
        .map(|s| s.placeholders.get("Title 1").unwrap().clone())
        .collect();
    assert_eq!(
        titles,
        vec![
            SlideValue::Text("First".to_string()),
            SlideValue::Text("Second".to_string()),
            SlideValue::Text("Third".to_string()),
        ]
    );
}

#[test]
fn malformed_planning_response_falls_back() {
    let planner = ScriptedPlanner::new(
        vec![json!({"surprise": true})],
        vec![], // design never reached
    );

    let (plan, report) = run_pipeline(
        &planner,
        &FailingImages,
        "# Broken\nbody line",
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 1);
    assert!(report.has_code(PipelineIssueCode::PlanningFallback));

    // The fallback carries the chunk's own text.
    let slide = &plan.slides[0];
    assert_eq!(slide.layout, "Title and Content");
    assert_eq!(
        slide.placeholders.get("Title 1"),
        Some(&SlideValue::Text("Broken".to_string()))
    );
}

#[test]
fn malformed_design_response_falls_back() {
    let planner = ScriptedPlanner::new(
        vec![json!({
            "topic": "Okay",
            "content_type": "paragraph",
            "raw_content": ["body"]
        })],
        vec![json!({"layout": 42})],
    );

    let (plan, report) = run_pipeline(
        &planner,
        &FailingImages,
        "# Okay\nbody",
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 1);
    assert!(report.has_code(PipelineIssueCode::DesignFallback));
}

#[test]
fn design_naming_unknown_layout_falls_back() {
    let planner = ScriptedPlanner::new(
        vec![json!({
            "topic": "Okay",
            "content_type": "paragraph",
            "raw_content": ["body"]
        })],
        vec![json!({
            "layout": "Nonexistent",
            "placeholders": {"Title 1": "Okay"}
        })],
    );

    let (plan, report) = run_pipeline(
        &planner,
        &FailingImages,
        "# Okay\nbody",
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 1);
    assert!(report.has_code(PipelineIssueCode::DesignFallback));
    assert_eq!(plan.slides[0].layout, "Title and Content");
}

#[test]
fn failed_chunk_does_not_halt_later_chunks() {
    let planner = ScriptedPlanner::new(
        vec![
            json!({"garbage": 1}),
            json!({
                "topic": "Survivor",
                "content_type": "paragraph",
                "raw_content": ["still here"]
            }),
        ],
        vec![json!({
            "layout": "Title Slide",
            "placeholders": {"Title 1": "Survivor"}
        })],
    );

    let (plan, report) = run_pipeline(
        &planner,
        &FailingImages,
        "# Bad\nx\n---\n# Good\ny",
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 2);
    assert!(report.has_code(PipelineIssueCode::PlanningFallback));
    assert_eq!(plan.slides[1].layout, "Title Slide");
    assert_eq!(
        plan.slides[1].placeholders.get("Title 1"),
        Some(&SlideValue::Text("Survivor".to_string()))
    );
}

#[test]
fn generated_image_lands_in_the_designed_slide() {
    let dir = tempfile::tempdir().unwrap();
    let planner = ScriptedPlanner::new(
        vec![json!({
            "topic": "Skyline",
            "content_type": "image_with_caption",
            "image_request": {"prompt": "a city skyline at dusk"},
            "raw_content": ["A skyline."]
        })],
        vec![], // EchoPlanner handles design below
    );

    // Plan with the scripted intent, then design with the echo double so the
    // asset path flows into the slide without the test knowing it upfront.
    let intent = slidesmith::pipeline::plan_chunk(
        &planner,
        &slidesmith::model::ContentChunk::new(0, "# Skyline\nA skyline."),
        &catalog(),
    )
    .unwrap();

    let asset = slidesmith::pipeline::resolve_asset(
        &StaticImages(vec![0x89, 0x50, 0x4e, 0x47]),
        &intent,
        dir.path(),
        0,
    )
    .unwrap()
    .expect("asset should be generated");

    assert!(asset.path.is_file());
    assert_eq!(
        asset.path.file_name().unwrap().to_str().unwrap(),
        "slide_1_skyline.png"
    );

    let slide = slidesmith::pipeline::design_chunk(
        &common::EchoPlanner,
        &intent,
        Some(&asset),
        &catalog(),
    )
    .unwrap();

    assert_eq!(
        slide.placeholders.get("Subtitle 2"),
        Some(&SlideValue::Text(asset.path.display().to_string()))
    );
}

#[test]
fn image_service_failure_degrades_to_imageless_slide() {
    let dir = tempfile::tempdir().unwrap();
    let planner = ScriptedPlanner::new(
        vec![json!({
            "topic": "Skyline",
            "content_type": "image_with_caption",
            "image_request": {"prompt": "a city skyline"},
            "raw_content": ["A skyline."]
        })],
        vec![json!({
            "layout": "Title Slide",
            "placeholders": {"Title 1": "Skyline"}
        })],
    );

    let options = PipelineOptions {
        images_dir: dir.path().to_path_buf(),
        generate_images: true,
    };

    let (plan, report) = run_pipeline(
        &planner,
        &FailingImages,
        "# Skyline\nA skyline.",
        &catalog(),
        &options,
    );

    assert_eq!(plan.slides.len(), 1);
    assert!(report.has_code(PipelineIssueCode::AssetUnavailable));
    assert!(!report.has_code(PipelineIssueCode::DesignFallback));
    // No image file was left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn skipping_images_never_calls_the_image_service() {
    struct Panicking;
    impl slidesmith::services::ImageGenerator for Panicking {
        fn generate(&self, _prompt: &str) -> Result<Vec<u8>, slidesmith::services::ServiceError> {
            panic!("image service must not be called");
        }
    }

    let planner = ScriptedPlanner::new(
        vec![json!({
            "topic": "Skyline",
            "content_type": "image_with_caption",
            "image_request": {"prompt": "a city skyline"},
            "raw_content": ["A skyline."]
        })],
        vec![json!({
            "layout": "Title Slide",
            "placeholders": {"Title 1": "Skyline"}
        })],
    );

    let (plan, report) = run_pipeline(
        &planner,
        &Panicking,
        "# Skyline\nA skyline.",
        &catalog(),
        &no_image_options(),
    );

    assert_eq!(plan.slides.len(), 1);
    assert!(report.is_clean());
}
