//! SD-Forge-compatible image generation client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::{ImageGenerator, ServiceError};

/// Client for a Stable Diffusion Forge `txt2img` endpoint.
pub struct ForgeClient {
    agent: ureq::Agent,
    base_url: String,
    model: Option<String>,
}

#[derive(Serialize)]
struct Txt2ImgRequest<'a> {
    prompt: &'a str,
    steps: u32,
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    override_settings: Option<OverrideSettings<'a>>,
}

#[derive(Serialize)]
struct OverrideSettings<'a> {
    sd_model_checkpoint: &'a str,
}

#[derive(Deserialize)]
struct Txt2ImgResponse {
    images: Vec<String>,
}

impl ForgeClient {
    pub fn new(base_url: impl Into<String>, model: Option<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(300)))
            .build();

        Self {
            agent: config.into(),
            base_url: base_url.into(),
            model,
        }
    }
}

impl ImageGenerator for ForgeClient {
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, ServiceError> {
        let url = url::Url::parse(&format!(
            "{}/sdapi/v1/txt2img",
            self.base_url.trim_end_matches('/')
        ))
        .map_err(|source| ServiceError::Transport(source.to_string()))?;

        let request = Txt2ImgRequest {
            prompt,
            steps: 20,
            width: 1024,
            height: 768,
            override_settings: self
                .model
                .as_deref()
                .map(|model| OverrideSettings {
                    sd_model_checkpoint: model,
                }),
        };

        log::debug!("requesting image from {url}");
        let mut response = self
            .agent
            .post(url.as_str())
            .send_json(&request)
            .map_err(|source| ServiceError::Transport(source.to_string()))?;

        let payload: Txt2ImgResponse = response
            .body_mut()
            .read_json()
            .map_err(|source| ServiceError::Payload(source.to_string()))?;

        decode_image_payload(payload)
    }
}

/// Decodes the first base64 image in the response.
fn decode_image_payload(payload: Txt2ImgResponse) -> Result<Vec<u8>, ServiceError> {
    let encoded = payload
        .images
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Payload("response contains no images".to_string()))?;

    BASE64
        .decode(encoded.as_bytes())
        .map_err(|source| ServiceError::Payload(format!("image data is not base64: {source}")))
}
