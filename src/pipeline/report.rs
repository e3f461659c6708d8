//! Pipeline report types for structured per-chunk diagnostics.
//!
//! Every failure the orchestrator recovers from lands here. The run never
//! aborts for a single chunk, so the report is the only place those
//! recoveries become visible.

use std::fmt;

use serde::Serialize;

/// Accumulated diagnostics for one pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PipelineReport {
    /// All issues, in the order they occurred.
    pub issues: Vec<PipelineIssue>,
}

impl PipelineReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: PipelineIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == PipelineSeverity::Warning)
            .count()
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue carries the given code.
    pub fn has_code(&self, code: PipelineIssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Pipeline completed: no issues");
        }

        writeln!(
            f,
            "Pipeline completed with {} warning(s):",
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single recovered pipeline issue.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineIssue {
    pub severity: PipelineSeverity,

    /// A stable code for the issue type.
    pub code: PipelineIssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Index of the chunk the issue occurred in.
    pub chunk: usize,
}

impl PipelineIssue {
    /// Creates a new warning.
    pub fn warning(code: PipelineIssueCode, message: impl Into<String>, chunk: usize) -> Self {
        Self {
            severity: PipelineSeverity::Warning,
            code,
            message: message.into(),
            chunk,
        }
    }

    /// Creates a new informational note.
    pub fn info(code: PipelineIssueCode, message: impl Into<String>, chunk: usize) -> Self {
        Self {
            severity: PipelineSeverity::Info,
            code,
            message: message.into(),
            chunk,
        }
    }
}

impl fmt::Display for PipelineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            PipelineSeverity::Warning => "WARN ",
            PipelineSeverity::Info => "INFO ",
        };
        write!(
            f,
            "[{}] {:?} in chunk {}: {}",
            severity, self.code, self.chunk, self.message
        )
    }
}

/// The severity of a pipeline issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PipelineSeverity {
    /// A policy note that needs no action.
    Info,
    /// A recovered failure that changed the output for one chunk.
    Warning,
}

/// A stable code identifying the type of pipeline issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PipelineIssueCode {
    /// Planning produced no valid intent; the deterministic fallback slide
    /// was used for the chunk.
    PlanningFallback,
    /// Design produced no valid final slide; the deterministic fallback
    /// slide was used for the chunk.
    DesignFallback,
    /// The image service failed; the chunk proceeded without an image.
    AssetUnavailable,
}
