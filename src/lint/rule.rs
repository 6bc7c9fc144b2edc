//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all document rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for issues (Info, Warning, Error)
//! - [`Category`] - Which part of a document an issue concerns

use std::fmt;

use serde::Serialize;

use super::document::Document;
use super::issue::Issue;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for issues.
///
/// Only [`Severity::Error`] affects whether a file is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational notice. Reserved; no built-in rule emits it.
    Info,
    /// Should be addressed, does not block validity.
    Warning,
    /// Blocks validity.
    Error,
}

impl Severity {
    /// Lowercase label used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of a document an issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontmatter,
    Breadcrumb,
    Structure,
    /// The file itself could not be read.
    File,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontmatter => "frontmatter",
            Category::Breadcrumb => "breadcrumb",
            Category::Structure => "structure",
            Category::File => "file",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lint rule that validates one document.
///
/// Rules are independent of each other: each one looks at the extracted
/// parts of a [`Document`] and reports what it finds. Rules must not keep
/// state between calls, so the same rule can check many files in parallel.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// The category every issue from this rule is filed under.
    fn category(&self) -> Category;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the document and return any issues.
    fn check(&self, doc: &Document<'_>) -> Vec<Issue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("breadcrumb");
        let id2 = RuleId::new("breadcrumb");
        let id3 = RuleId::new("heading-structure");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("frontmatter-fields");
        assert_eq!(format!("{}", id), "frontmatter-fields");
        assert_eq!(id.as_str(), "frontmatter-fields");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Info), "info");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Frontmatter.to_string(), "frontmatter");
        assert_eq!(Category::Breadcrumb.to_string(), "breadcrumb");
        assert_eq!(Category::Structure.to_string(), "structure");
        assert_eq!(Category::File.to_string(), "file");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
