//! wikilint - Validate migrated wiki documentation.
//!
//! wikilint checks Markdown pages produced by a wiki migration: their YAML
//! frontmatter, the breadcrumb navigation line and the heading structure.
//! Results are aggregated into a text report, or emitted as JSON or SARIF.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.wikilint.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Document validation rules, aggregation and report formats
//! - [`scanner`] - Documentation tree discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use wikilint::lint::{aggregate, render, validate};
//!
//! let page = "---\ntitle: Setup\n---\n[Home](/) > [Meta](/Meta/) > Setup\n# Setup\n";
//! let validations = vec![validate(page, Path::new("Meta/setup.md"))];
//!
//! let summary = aggregate(&validations);
//! assert_eq!(summary.invalid, 1); // description, category, ... are missing
//! assert!(render(&summary, &validations).contains("Meta/setup.md"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod scanner;
pub mod ui;

pub use error::{Result, WikilintError};
