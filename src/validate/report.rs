//! Plan validation report types.

use std::fmt;

use serde::Serialize;

/// The result of validating a presentation plan against a layout catalog.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PlanReport {
    /// All issues found during validation.
    pub issues: Vec<PlanIssue>,
}

impl PlanReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: PlanIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == PlanSeverity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == PlanSeverity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Validation completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single plan validation issue.
#[derive(Clone, Debug, Serialize)]
pub struct PlanIssue {
    /// The severity of the issue.
    pub severity: PlanSeverity,

    /// A stable code for the issue type.
    pub code: PlanIssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Index of the plan slide the issue occurred in.
    pub slide: usize,
}

impl PlanIssue {
    /// Creates a new error.
    pub fn error(code: PlanIssueCode, message: impl Into<String>, slide: usize) -> Self {
        Self {
            severity: PlanSeverity::Error,
            code,
            message: message.into(),
            slide,
        }
    }

    /// Creates a new warning.
    pub fn warning(code: PlanIssueCode, message: impl Into<String>, slide: usize) -> Self {
        Self {
            severity: PlanSeverity::Warning,
            code,
            message: message.into(),
            slide,
        }
    }
}

impl fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            PlanSeverity::Error => "ERROR",
            PlanSeverity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in slide {}: {}",
            severity,
            self.code,
            self.slide + 1,
            self.message
        )
    }
}

/// The severity of a plan validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlanSeverity {
    /// A discrepancy population will recover from, at the cost of dropped
    /// or degraded content.
    Warning,
    /// A discrepancy that will lose a whole slide at population time.
    Error,
}

/// A stable code identifying the type of plan validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlanIssueCode {
    /// A slide names a layout the catalog does not list.
    UnknownLayout,
    /// A placeholder name is absent from the chosen layout's list.
    UnknownPlaceholder,
    /// A slide carries no placeholder values at all.
    EmptySlide,
}
