//! Document validation.
//!
//! This module checks wiki pages through a pluggable rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Extraction** - Splitting a page into frontmatter and body ([`frontmatter`])
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - The ordered set of rules to run ([`RuleRegistry`])
//! - **Validation** - Per-file results ([`Validator`], [`FileValidation`])
//! - **Reporting** - Run statistics and formatters ([`ValidationSummary`], [`output`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use wikilint::lint::{aggregate, validate, Severity};
//!
//! let page = "---\ntitle: Foo\n---\n# Foo\n";
//! let result = validate(page, Path::new("Meta/foo.md"));
//! assert!(result.has_frontmatter);
//! assert!(result.error_count() > 0);
//!
//! let summary = aggregate(&[result]);
//! assert_eq!(summary.invalid, 1);
//!
//! // Severity has ordering
//! assert!(Severity::Info < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod document;
pub mod fields;
pub mod frontmatter;
pub mod issue;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod summary;
pub mod validation;

pub use document::Document;
pub use fields::{FieldRequirement, FieldSpec, FieldTable};
pub use issue::Issue;
pub use output::{
    render, HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, SarifFormatter,
};
pub use registry::RuleRegistry;
pub use rule::{Category, LintRule, RuleId, Severity};
pub use rules::{BreadcrumbRule, FrontmatterFieldsRule, HeadingStructureRule};
pub use summary::{aggregate, ValidationSummary};
pub use validation::{validate, validate_unreadable, FileValidation, Validator};
