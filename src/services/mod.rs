//! External service boundaries for planning, design, and image generation.
//!
//! The two content stages delegate their judgment to a text-understanding
//! service and the asset stage to an image-generation service. Both are
//! traits with one method per stage so tests can inject scripted doubles;
//! the production implementations live in [`openrouter`] and [`forge`].
//!
//! Trait methods that feed the content stages return raw
//! [`serde_json::Value`]: schema validation belongs to the pipeline stages,
//! not to the transport.

pub mod forge;
pub mod openrouter;

use serde_json::Value;
use thiserror::Error;

use crate::model::{ContentChunk, LayoutCatalog, ResolvedAsset, SlideIntent};

pub use forge::ForgeClient;
pub use openrouter::OpenRouterClient;

/// An error from an external service call.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a usable response (network failure,
    /// timeout, non-success status).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service responded, but the payload was unusable.
    #[error("unusable response payload: {0}")]
    Payload(String),
}

/// The text-understanding service behind the planning and design stages.
///
/// Implementations are given the chunk or intent plus the layout catalog and
/// must return data that maps onto the `SlideIntent` or `FinalSlide` schema
/// respectively. The calling stage validates the returned value; a failure
/// there is the caller's to recover, not the service's.
pub trait SlidePlanner {
    /// Interprets one content chunk into slide-intent data.
    fn plan_slide(
        &self,
        chunk: &ContentChunk,
        catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError>;

    /// Binds an intent (and optional generated asset) to final-slide data.
    fn design_slide(
        &self,
        intent: &SlideIntent,
        asset: Option<&ResolvedAsset>,
        catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError>;
}

/// The image-generation service behind the asset-resolution stage.
pub trait ImageGenerator {
    /// Generates an image for the prompt, returning the raw encoded bytes.
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, ServiceError>;
}

/// An image generator that always declines.
///
/// Used when no image server is configured or image generation is turned
/// off; asset resolution degrades to imageless slides.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullImageGenerator;

impl ImageGenerator for NullImageGenerator {
    fn generate(&self, _prompt: &str) -> Result<Vec<u8>, ServiceError> {
        Err(ServiceError::Transport(
            "image generation is not configured".to_string(),
        ))
    }
}
