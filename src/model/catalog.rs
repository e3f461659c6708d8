//! Layout catalog: the immutable description of a template's layouts.

use serde::{Deserialize, Serialize};

use crate::document::TemplateDocument;
use crate::error::SlidesmithError;

/// One layout exposed by a template: a name plus the ordered list of its
/// named placeholder shapes.
///
/// Placeholder names are not required to be unique by the catalog, but they
/// are treated as unique within their layout for matching purposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    /// Layout name, unique within the owning catalog.
    pub name: String,

    /// Names of the layout's placeholder shapes, in template order.
    pub placeholders: Vec<String>,
}

impl LayoutDescriptor {
    /// Creates a new layout descriptor.
    pub fn new(name: impl Into<String>, placeholders: Vec<String>) -> Self {
        Self {
            name: name.into(),
            placeholders,
        }
    }

    /// Returns true if the layout lists a placeholder with exactly this name.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p == name)
    }
}

/// The catalog of every layout a template exposes.
///
/// Built once when a template is analyzed and immutable thereafter. The
/// content pipeline and the population engine both consume it read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCatalog {
    /// Path or identifier of the template this catalog was built from,
    /// carried forward so later stages need not be told it again.
    pub source_template: String,

    /// All layouts, in template order.
    pub layouts: Vec<LayoutDescriptor>,
}

impl LayoutCatalog {
    /// Builds a catalog from a template document.
    ///
    /// Enumerates every layout and, for each, every *named* placeholder shape.
    /// Placeholders without an assigned name are excluded: they cannot be
    /// targeted by name later, so listing them would only invite dangling
    /// references. This is a documented scope limitation, not a defect.
    ///
    /// # Errors
    /// Returns [`SlidesmithError::InvalidTemplate`] if the template exposes
    /// zero layouts. No partial catalog is ever returned.
    pub fn analyze(
        template: &TemplateDocument,
        source: impl Into<String>,
    ) -> Result<Self, SlidesmithError> {
        let source = source.into();

        if template.layouts.is_empty() {
            return Err(SlidesmithError::InvalidTemplate {
                path: source.into(),
                reason: "template exposes no layouts".to_string(),
            });
        }

        let layouts = template
            .layouts
            .iter()
            .map(|layout| LayoutDescriptor {
                name: layout.name.clone(),
                placeholders: layout
                    .placeholders
                    .iter()
                    .filter_map(|p| p.name.clone())
                    .collect(),
            })
            .collect();

        Ok(Self {
            source_template: source,
            layouts,
        })
    }

    /// Looks up a layout by exact name.
    pub fn layout(&self, name: &str) -> Option<&LayoutDescriptor> {
        self.layouts.iter().find(|l| l.name == name)
    }

    /// Returns true if the catalog contains a layout with exactly this name.
    pub fn contains_layout(&self, name: &str) -> bool {
        self.layout(name).is_some()
    }
}
