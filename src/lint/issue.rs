//! Validation issues.
//!
//! This module provides the [`Issue`] type for representing problems found
//! while validating a document, with an optional line number and an
//! optional remediation suggestion.

use std::fmt;

use serde::Serialize;

use super::rule::{Category, RuleId, Severity};

/// A single problem found in a document.
///
/// Issues are immutable once built; the builder methods consume `self`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// The rule that produced this issue.
    pub rule_id: RuleId,
    /// Severity of this issue.
    pub severity: Severity,
    /// Which part of the document the issue concerns.
    pub category: Category,
    /// Human-readable message.
    pub message: String,
    /// 1-based line number in the source file, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Optional suggestion for fixing the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            category,
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    /// Attach a line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `[CATEGORY] (line N) message`, the form used in text reports.
impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.category.as_str().to_uppercase())?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        write!(f, " {}", self.message)
    }
}
