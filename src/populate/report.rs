//! Population report types: per-placeholder resolution outcomes.

use std::fmt;

use serde::Serialize;

/// The result of populating a deck from a presentation plan.
///
/// Diagnostics only: outcomes never block generation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PopulationReport {
    /// All outcomes, in population order.
    pub outcomes: Vec<PopulationOutcome>,
}

impl PopulationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Adds an outcome to the report.
    pub fn add(&mut self, outcome: PopulationOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the number of placeholders that received content.
    pub fn matched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched).count()
    }

    /// Returns the number of outcomes that did not place content.
    pub fn unmatched_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.matched).count()
    }

    /// Returns the number of outcomes carrying the given reason code.
    pub fn count_code(&self, code: OutcomeCode) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.reason == Some(code))
            .count()
    }

    /// Returns true if every value landed exactly as planned.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.reason.is_none())
    }
}

impl fmt::Display for PopulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issues = self.outcomes.iter().filter(|o| o.reason.is_some()).count();
        writeln!(
            f,
            "Populated {} placeholder(s) with {} issue(s):",
            self.matched_count(),
            issues
        )?;

        if issues > 0 {
            writeln!(f)?;
            for outcome in self.outcomes.iter().filter(|o| o.reason.is_some()) {
                writeln!(f, "  {}", outcome)?;
            }
        }

        Ok(())
    }
}

/// The kind of content a placeholder value carried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    /// A single text paragraph.
    Text,
    /// An ordered list of paragraphs.
    Lines,
    /// An image file reference.
    Image,
}

/// A stable code for why a value did not land as planned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OutcomeCode {
    /// The slide's layout is absent from the physical template; the whole
    /// slide was skipped.
    UnknownLayout,
    /// No shape on the slide carries the placeholder's name; the value was
    /// dropped.
    UnmatchedPlaceholder,
    /// The referenced image file was not found; the reference was written
    /// as visible text instead.
    MissingImageFile,
}

/// The per-placeholder result of one population step.
#[derive(Clone, Debug, Serialize)]
pub struct PopulationOutcome {
    /// Index of the plan slide the outcome belongs to.
    pub slide: usize,

    /// Placeholder name, or `None` for slide-level outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Kind of the planned value, when one was involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_kind: Option<ValueKind>,

    /// True when a shape received content. A degraded write (an image
    /// reference written as text) still counts as matched.
    pub matched: bool,

    /// Reason the value did not land exactly as planned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<OutcomeCode>,
}

impl PopulationOutcome {
    /// A value placed exactly as planned.
    pub fn matched(slide: usize, placeholder: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            slide,
            placeholder: Some(placeholder.into()),
            value_kind: Some(kind),
            matched: true,
            reason: None,
        }
    }

    /// An image reference whose file was missing; written as text.
    pub fn missing_image(slide: usize, placeholder: impl Into<String>) -> Self {
        Self {
            slide,
            placeholder: Some(placeholder.into()),
            value_kind: Some(ValueKind::Image),
            matched: true,
            reason: Some(OutcomeCode::MissingImageFile),
        }
    }

    /// A placeholder name with no matching shape on the slide.
    pub fn unmatched(slide: usize, placeholder: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            slide,
            placeholder: Some(placeholder.into()),
            value_kind: Some(kind),
            matched: false,
            reason: Some(OutcomeCode::UnmatchedPlaceholder),
        }
    }

    /// A whole slide skipped because its layout is unknown.
    pub fn skipped_slide(slide: usize) -> Self {
        Self {
            slide,
            placeholder: None,
            value_kind: None,
            matched: false,
            reason: Some(OutcomeCode::UnknownLayout),
        }
    }
}

impl fmt::Display for PopulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.placeholder, &self.reason) {
            (Some(name), Some(reason)) => {
                write!(f, "slide {} placeholder '{}': {:?}", self.slide + 1, name, reason)
            }
            (Some(name), None) => {
                write!(f, "slide {} placeholder '{}': populated", self.slide + 1, name)
            }
            (None, Some(reason)) => {
                write!(f, "slide {}: {:?} - slide skipped", self.slide + 1, reason)
            }
            (None, None) => write!(f, "slide {}: populated", self.slide + 1),
        }
    }
}
