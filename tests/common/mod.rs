#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{json, Value};
use slidesmith::model::{ContentChunk, LayoutCatalog, ResolvedAsset, SlideIntent};
use slidesmith::services::{ImageGenerator, ServiceError, SlidePlanner};

/// A planner double that replays scripted JSON responses in order and fails
/// once the script runs out.
pub struct ScriptedPlanner {
    plans: RefCell<VecDeque<Value>>,
    designs: RefCell<VecDeque<Value>>,
}

impl ScriptedPlanner {
    pub fn new(plans: Vec<Value>, designs: Vec<Value>) -> Self {
        Self {
            plans: RefCell::new(plans.into()),
            designs: RefCell::new(designs.into()),
        }
    }
}

impl SlidePlanner for ScriptedPlanner {
    fn plan_slide(
        &self,
        _chunk: &ContentChunk,
        _catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        self.plans
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ServiceError::Transport("planning script exhausted".to_string()))
    }

    fn design_slide(
        &self,
        _intent: &SlideIntent,
        _asset: Option<&ResolvedAsset>,
        _catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        self.designs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ServiceError::Transport("design script exhausted".to_string()))
    }
}

/// A planner double that derives deterministic responses from its input:
/// the chunk's first line becomes the topic, and design picks the catalog's
/// first layout, assigning the topic to its first placeholder and the asset
/// path (when present) to its second.
pub struct EchoPlanner;

impl SlidePlanner for EchoPlanner {
    fn plan_slide(
        &self,
        chunk: &ContentChunk,
        _catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        let topic = chunk
            .text
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches('#')
            .trim();
        Ok(json!({
            "topic": topic,
            "content_type": "paragraph",
            "raw_content": [chunk.text],
        }))
    }

    fn design_slide(
        &self,
        intent: &SlideIntent,
        asset: Option<&ResolvedAsset>,
        catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        let layout = catalog
            .layouts
            .first()
            .ok_or_else(|| ServiceError::Payload("catalog has no layouts".to_string()))?;

        let mut placeholders = serde_json::Map::new();
        if let Some(first) = layout.placeholders.first() {
            placeholders.insert(first.clone(), json!(intent.topic));
        }
        if let (Some(second), Some(asset)) = (layout.placeholders.get(1), asset) {
            placeholders.insert(second.clone(), json!(asset.path.display().to_string()));
        }

        Ok(json!({
            "layout": layout.name,
            "placeholders": placeholders,
        }))
    }
}

/// An image generator double that always yields the same bytes.
pub struct StaticImages(pub Vec<u8>);

impl ImageGenerator for StaticImages {
    fn generate(&self, _prompt: &str) -> Result<Vec<u8>, ServiceError> {
        Ok(self.0.clone())
    }
}

/// An image generator double that always fails.
pub struct FailingImages;

impl ImageGenerator for FailingImages {
    fn generate(&self, _prompt: &str) -> Result<Vec<u8>, ServiceError> {
        Err(ServiceError::Transport("image service down".to_string()))
    }
}
