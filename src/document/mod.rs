//! Logical template and deck documents.
//!
//! The binary presentation container format is out of scope; what the rest
//! of the system needs from a template is exactly three capabilities:
//! enumerating layouts, finding placeholder shapes by name, and holding the
//! text or image content of a shape. These types are that capability surface
//! as a JSON-backed document.
//!
//! A [`TemplateDocument`] is opened read-only (catalog construction and
//! population both consume it without mutation). A [`DeckDocument`] is the
//! only mutable artifact in the system, and it is written strictly in slide
//! order by a single writer.

pub mod io_json;

use serde::{Deserialize, Serialize};

/// A placeholder shape on a template layout.
///
/// Templates may contain unnamed placeholders; those cannot be targeted by
/// name and are skipped during catalog construction and slide instantiation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePlaceholder {
    #[serde(default)]
    pub name: Option<String>,
}

impl TemplatePlaceholder {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// One layout of a template: a named arrangement of placeholder shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLayout {
    pub name: String,
    pub placeholders: Vec<TemplatePlaceholder>,
}

impl TemplateLayout {
    /// Iterates the names of the layout's named placeholders, in order.
    pub fn named_placeholders(&self) -> impl Iterator<Item = &str> {
        self.placeholders
            .iter()
            .filter_map(|p| p.name.as_deref())
    }
}

/// A presentation template: the document population instantiates slides from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocument {
    /// Display name of the template.
    pub name: String,

    /// All layouts the template exposes, in order.
    pub layouts: Vec<TemplateLayout>,
}

impl TemplateDocument {
    /// Looks up a layout by exact, case-sensitive name.
    pub fn layout(&self, name: &str) -> Option<&TemplateLayout> {
        self.layouts.iter().find(|l| l.name == name)
    }
}

/// Content held by one shape of a generated slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeContent {
    /// The shape was instantiated but never populated.
    #[default]
    Empty,
    /// Text content, one string per paragraph.
    Text { paragraphs: Vec<String> },
    /// An embedded image, referenced by resolved file path.
    Image { path: String },
}

/// A named shape on a generated slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckShape {
    pub name: String,
    pub content: ShapeContent,
}

/// One generated slide: an instance of a layout with populated shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSlide {
    /// Name of the layout this slide was instantiated from.
    pub layout: String,
    pub shapes: Vec<DeckShape>,
}

impl DeckSlide {
    /// Instantiates a fresh slide from a layout: one empty shape per named
    /// placeholder, in layout order.
    pub fn from_layout(layout: &TemplateLayout) -> Self {
        Self {
            layout: layout.name.clone(),
            shapes: layout
                .named_placeholders()
                .map(|name| DeckShape {
                    name: name.to_string(),
                    content: ShapeContent::Empty,
                })
                .collect(),
        }
    }

    /// Finds a shape by exact, case-sensitive name.
    pub fn shape(&self, name: &str) -> Option<&DeckShape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    pub fn shape_mut(&mut self, name: &str) -> Option<&mut DeckShape> {
        self.shapes.iter_mut().find(|s| s.name == name)
    }
}

/// A generated deck: the output of the population engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDocument {
    /// Name of the template the deck was generated from.
    pub template: String,
    pub slides: Vec<DeckSlide>,
}
