//! Presentation plan validation.
//!
//! An offline consistency check of a plan against a layout catalog, run
//! before committing to population: layouts the catalog does not list are
//! errors (population will skip those slides), placeholder names the chosen
//! layout does not list are warnings (population will drop those values),
//! and a slide with no content at all is a warning.

mod report;

pub use report::{PlanIssue, PlanIssueCode, PlanReport, PlanSeverity};

use crate::model::{LayoutCatalog, PresentationPlan};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a presentation plan against a layout catalog.
pub fn validate_plan(
    plan: &PresentationPlan,
    catalog: &LayoutCatalog,
    _opts: &ValidateOptions,
) -> PlanReport {
    let mut report = PlanReport::new();

    for (index, slide) in plan.slides.iter().enumerate() {
        let Some(layout) = catalog.layout(&slide.layout) else {
            report.add(PlanIssue::error(
                PlanIssueCode::UnknownLayout,
                format!("layout '{}' is not in the catalog", slide.layout),
                index,
            ));
            continue;
        };

        if slide.placeholders.is_empty() {
            report.add(PlanIssue::warning(
                PlanIssueCode::EmptySlide,
                "slide has no placeholder values",
                index,
            ));
        }

        for (name, _) in slide.placeholders.iter() {
            if !layout.has_placeholder(name) {
                report.add(PlanIssue::warning(
                    PlanIssueCode::UnknownPlaceholder,
                    format!(
                        "placeholder '{}' is not in layout '{}'",
                        name, layout.name
                    ),
                    index,
                ));
            }
        }
    }

    report
}
