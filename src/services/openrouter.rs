//! OpenRouter-compatible chat-completions client for planning and design.
//!
//! Prompt text lives here and nowhere else: the pipeline stages see only the
//! trait and the JSON values it yields.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ServiceError, SlidePlanner};
use crate::model::{ContentChunk, LayoutCatalog, ResolvedAsset, SlideIntent};

const PLANNING_PROMPT: &str = "You are a presentation designer's assistant. You are given one \
markdown section of a larger document and a JSON object describing the slide layouts available \
in the target template.\n\
\n\
Interpret the section as the content of a single slide and respond with a single JSON object, \
and nothing else, with these keys:\n\
- \"topic\": a brief topic or title for the slide.\n\
- \"content_type\": one of \"paragraph\", \"bullet_list\", \"title_only\", \"image_with_caption\".\n\
- \"raw_content\": the text content broken into a list of strings (sentences or bullets).\n\
- \"image_request\": only when content_type is \"image_with_caption\", an object with a \
\"prompt\" key holding a detailed prompt for an image generation model. Omit it otherwise.\n\
\n\
Do not choose a layout; that happens later.\n\
\n\
AVAILABLE LAYOUTS:\n{layouts}\n\
\n\
MARKDOWN SECTION:\n{chunk}\n";

const DESIGN_PROMPT: &str = "You are a presentation designer's assistant. You are given the \
structured plan for a single slide and a JSON object describing the slide layouts available in \
the target template.\n\
\n\
Choose the most appropriate layout and respond with a single JSON object, and nothing else, \
with these keys:\n\
- \"layout\": a string that EXACTLY matches one of the layout names from the available layouts.\n\
- \"placeholders\": an object whose keys EXACTLY match placeholder names of the chosen layout \
(e.g. \"Title 1\", \"Content Placeholder 2\") and whose values are a string or a list of \
strings. When an image path is provided below, assign that exact path string to an \
image-bearing placeholder.\n\
\n\
AVAILABLE LAYOUTS:\n{layouts}\n\
\n\
SLIDE PLAN:\n{intent}\n\
{image_line}";

/// Client for an OpenRouter-compatible chat-completions endpoint.
pub struct OpenRouterClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenRouterClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(120)))
            .build();

        Self {
            agent: config.into(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn complete(&self, prompt: &str) -> Result<Value, ServiceError> {
        let url = url::Url::parse(&format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        ))
        .map_err(|source| ServiceError::Transport(source.to_string()))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            // Low temperature for deterministic, structured output.
            temperature: 0.2,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        log::debug!("requesting completion from {url}");
        let mut response = self
            .agent
            .post(url.as_str())
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&request)
            .map_err(|source| ServiceError::Transport(source.to_string()))?;

        let payload: ChatResponse = response
            .body_mut()
            .read_json()
            .map_err(|source| ServiceError::Payload(source.to_string()))?;

        decode_chat_payload(payload)
    }
}

impl SlidePlanner for OpenRouterClient {
    fn plan_slide(
        &self,
        chunk: &ContentChunk,
        catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        self.complete(&render_planning_prompt(chunk, catalog))
    }

    fn design_slide(
        &self,
        intent: &SlideIntent,
        asset: Option<&ResolvedAsset>,
        catalog: &LayoutCatalog,
    ) -> Result<Value, ServiceError> {
        self.complete(&render_design_prompt(intent, asset, catalog))
    }
}

fn render_planning_prompt(chunk: &ContentChunk, catalog: &LayoutCatalog) -> String {
    let layouts = serde_json::to_string_pretty(&catalog.layouts).unwrap_or_default();
    PLANNING_PROMPT
        .replace("{layouts}", &layouts)
        .replace("{chunk}", &chunk.text)
}

fn render_design_prompt(
    intent: &SlideIntent,
    asset: Option<&ResolvedAsset>,
    catalog: &LayoutCatalog,
) -> String {
    let layouts = serde_json::to_string_pretty(&catalog.layouts).unwrap_or_default();
    let intent_json = serde_json::to_string_pretty(intent).unwrap_or_default();
    let image_line = match asset {
        Some(asset) => format!("GENERATED IMAGE PATH:\n{}\n", asset.path.display()),
        None => String::new(),
    };
    DESIGN_PROMPT
        .replace("{layouts}", &layouts)
        .replace("{intent}", &intent_json)
        .replace("{image_line}", &image_line)
}

/// Extracts and parses the first choice's message content as JSON.
fn decode_chat_payload(payload: ChatResponse) -> Result<Value, ServiceError> {
    let content = payload
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ServiceError::Payload("response contains no choices".to_string()))?;

    let content = strip_code_fences(&content);
    serde_json::from_str(content)
        .map_err(|source| ServiceError::Payload(format!("message content is not JSON: {source}")))
}

/// Trims a ```json ... ``` wrapper some models insist on adding.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LayoutDescriptor;

    fn catalog() -> LayoutCatalog {
        LayoutCatalog {
            source_template: "test.template.json".to_string(),
            layouts: vec![LayoutDescriptor::new(
                "Title Slide",
                vec!["Title 1".to_string(), "Subtitle 2".to_string()],
            )],
        }
    }

    #[test]
    fn planning_prompt_carries_chunk_and_layouts() {
        let chunk = ContentChunk::new(0, "# Welcome\nHello there.");
        let prompt = render_planning_prompt(&chunk, &catalog());

        assert!(prompt.contains("# Welcome"));
        assert!(prompt.contains("Title Slide"));
        assert!(prompt.contains("Subtitle 2"));
    }

    #[test]
    fn design_prompt_mentions_asset_path_when_present() {
        let intent = SlideIntent {
            topic: "Welcome".to_string(),
            kind: crate::model::ContentKind::ImageWithCaption,
            image_request: None,
            raw_content: vec!["Caption.".to_string()],
        };
        let asset = ResolvedAsset {
            path: "images/slide_1_welcome.png".into(),
        };

        let with = render_design_prompt(&intent, Some(&asset), &catalog());
        assert!(with.contains("images/slide_1_welcome.png"));

        let without = render_design_prompt(&intent, None, &catalog());
        assert!(!without.contains("GENERATED IMAGE PATH"));
    }

    #[test]
    fn chat_payload_decodes_message_content() {
        let payload = ChatResponse {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: "{\"topic\": \"Welcome\"}".to_string(),
                },
            }],
        };

        let value = decode_chat_payload(payload).unwrap();
        assert_eq!(value["topic"], "Welcome");
    }

    #[test]
    fn chat_payload_without_choices_is_rejected() {
        let payload = ChatResponse { choices: vec![] };
        assert!(decode_chat_payload(payload).is_err());
    }

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }
}
