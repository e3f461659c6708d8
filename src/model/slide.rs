//! Per-slide content types: chunks, intents, and final slides.

use std::fmt;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One markdown-delimited unit of source content, mapped to exactly one
/// output slide.
///
/// The index is the chunk's position in the segmented sequence and is the
/// only place slide order is determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentChunk {
    pub index: usize,
    pub text: String,
}

impl ContentChunk {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// The primary kind of content a slide carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Flowing narrative text.
    Paragraph,
    /// A bulleted list, one entry per line.
    BulletList,
    /// A heading with no body content.
    TitleOnly,
    /// An image with an accompanying caption.
    ImageWithCaption,
}

impl ContentKind {
    /// Returns true for kinds that may legitimately carry an image request.
    pub fn expects_image(&self) -> bool {
        matches!(self, ContentKind::ImageWithCaption)
    }
}

/// A request to generate an image for a slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Prompt text for the image-generation service.
    pub prompt: String,
}

/// The validated, structured interpretation of one chunk prior to layout
/// selection.
///
/// Invariant: `image_request` is present only when `kind` expects imagery;
/// the planning stage enforces this before an intent leaves the stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideIntent {
    /// Brief topic or title for the slide.
    pub topic: String,

    /// The primary kind of content on the slide.
    #[serde(rename = "content_type")]
    pub kind: ContentKind,

    /// Optional request to generate an image for this slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_request: Option<ImageRequest>,

    /// Raw text content, broken into lines (sentences or bullets).
    pub raw_content: Vec<String>,
}

/// A generated image persisted to disk, associated with exactly one intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedAsset {
    /// Location of the persisted image, as it should appear in the plan.
    pub path: PathBuf,
}

/// The content assigned to one placeholder of a final slide.
///
/// An image reference travels as `Text` holding the file path; the
/// population engine recognizes it by its raster-image extension. The plan
/// file format (string or string list) cannot mark image values explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideValue {
    /// A single paragraph of text, or an image file path.
    Text(String),
    /// One paragraph per entry, order preserved.
    Lines(Vec<String>),
}

impl From<&str> for SlideValue {
    fn from(value: &str) -> Self {
        SlideValue::Text(value.to_string())
    }
}

impl From<String> for SlideValue {
    fn from(value: String) -> Self {
        SlideValue::Text(value)
    }
}

impl From<Vec<String>> for SlideValue {
    fn from(value: Vec<String>) -> Self {
        SlideValue::Lines(value)
    }
}

/// An ordered mapping from placeholder name to content value.
///
/// Serialized as a plain JSON object. Insertion order is preserved through
/// serialization and back, because the order placeholders are listed in is
/// the order they are populated in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderValues {
    entries: Vec<(String, SlideValue)>,
}

impl PlaceholderValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name/value pair. Names are treated as unique within a
    /// slide; inserting an existing name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SlideValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SlideValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlideValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SlideValue)> for PlaceholderValues {
    fn from_iter<I: IntoIterator<Item = (String, SlideValue)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl Serialize for PlaceholderValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PlaceholderValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValuesVisitor;

        impl<'de> Visitor<'de> for ValuesVisitor {
            type Value = PlaceholderValues;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of placeholder names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = PlaceholderValues::new();
                while let Some((name, value)) = access.next_entry::<String, SlideValue>()? {
                    values.insert(name, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(ValuesVisitor)
    }
}

/// The validated, layout-bound structured content for one output slide.
///
/// `layout` names a layout in the catalog used during design; the population
/// engine does not re-validate it against the catalog and instead reports
/// `UnknownLayout` when the physical template lacks it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSlide {
    /// Name of the layout to instantiate for this slide.
    pub layout: String,

    /// Ordered mapping from placeholder name to content value.
    pub placeholders: PlaceholderValues,
}

impl FinalSlide {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            placeholders: PlaceholderValues::new(),
        }
    }

    /// Builder-style insertion of a placeholder value.
    pub fn with_placeholder(mut self, name: impl Into<String>, value: impl Into<SlideValue>) -> Self {
        self.placeholders.insert(name, value);
        self
    }
}

/// The full ordered sequence of final slides for a deck.
///
/// Slide order equals chunk order and must be preserved exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationPlan {
    pub slides: Vec<FinalSlide>,
}
