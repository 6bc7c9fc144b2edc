//! Per-file validation.
//!
//! [`Validator`] runs the frontmatter extractor and every registered rule
//! against one document and records the result as a [`FileValidation`].
//! Each call is independent, so a single validator can be shared across
//! threads.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::fields::FieldTable;
use super::frontmatter;
use super::rules::{BreadcrumbRule, FrontmatterFieldsRule};
use super::{Category, Document, Issue, RuleId, RuleRegistry, Severity};
use crate::config::RuleSettings;

/// Rule id attached to issues for files that could not be read.
pub const FILE_READ_RULE: &str = "file-read";

/// Validation result for a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
    pub has_frontmatter: bool,
    /// A `title:` line and no deprecated field.
    pub is_new_style: bool,
    pub is_old_style: bool,
    /// A breadcrumb line was found, valid or not.
    pub has_breadcrumb: bool,
    pub breadcrumb_valid: bool,
}

impl FileValidation {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            issues: Vec::new(),
            has_frontmatter: false,
            is_new_style: false,
            is_old_style: false,
            has_breadcrumb: false,
            breadcrumb_valid: false,
        }
    }

    /// A file is valid when it has no errors. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(Issue::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.issues_with(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues_with(Severity::Warning).count()
    }

    /// Issues of exactly `severity`, in report order.
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}

/// Runs the rule set against documents.
pub struct Validator {
    registry: RuleRegistry,
    fields: FieldTable,
    breadcrumb: BreadcrumbRule,
}

impl Validator {
    /// A validator with the built-in rules at their defaults.
    pub fn new() -> Self {
        Self::from_settings(&RuleSettings::default())
    }

    /// A validator with the built-in rules tuned by `settings`.
    pub fn from_settings(settings: &RuleSettings) -> Self {
        Self {
            registry: RuleRegistry::from_settings(settings),
            fields: FieldTable::from_lists(
                &settings.required_fields,
                &settings.recommended_fields,
                &settings.deprecated_fields,
            ),
            breadcrumb: BreadcrumbRule::new(settings.breadcrumb_scan_lines),
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validate `content` as the document at logical `path`.
    ///
    /// A document without frontmatter gets a single error and no other
    /// rule runs.
    pub fn validate(&self, content: &str, path: &Path) -> FileValidation {
        let mut validation = FileValidation::new(path);
        let extracted = frontmatter::extract(content);

        if !extracted.has_frontmatter() {
            tracing::debug!("{}: no frontmatter", path.display());
            validation
                .issues
                .push(FrontmatterFieldsRule::missing_frontmatter());
            return validation;
        }

        let doc = Document::new(path, &extracted);
        for rule in self.registry.iter() {
            let issues = rule.check(&doc);
            tracing::trace!(
                "{}: rule {} reported {} issue(s)",
                path.display(),
                rule.id(),
                issues.len()
            );
            validation.issues.extend(issues);
        }

        let fm = doc.frontmatter;
        validation.has_frontmatter = true;
        validation.is_old_style = self.fields.legacy_signals(fm).is_old_style();
        validation.is_new_style =
            frontmatter::has_key(fm, "title") && !self.fields.has_deprecated_field(fm);
        validation.has_breadcrumb = self.breadcrumb.find(&doc).is_some();
        validation.breadcrumb_valid = validation.has_breadcrumb
            && !validation
                .issues
                .iter()
                .any(|i| i.category == Category::Breadcrumb);

        validation
    }

    /// Read and validate the file at `fs_path`, reporting it as `logical`.
    ///
    /// Read failures become a File issue instead of an error.
    pub fn validate_file(&self, fs_path: &Path, logical: &Path) -> FileValidation {
        match fs::read_to_string(fs_path) {
            Ok(content) => self.validate(&content, logical),
            Err(err) => {
                tracing::warn!("Could not read {}: {}", fs_path.display(), err);
                validate_unreadable(logical, err)
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a document with the default rule set.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use wikilint::lint::validate;
///
/// let result = validate("# No frontmatter here\n", Path::new("Meta/page.md"));
/// assert!(!result.is_valid());
/// assert!(!result.has_frontmatter);
/// ```
pub fn validate(content: &str, path: &Path) -> FileValidation {
    Validator::new().validate(content, path)
}

/// The result for a file whose content could not be read.
pub fn validate_unreadable(path: &Path, error: impl fmt::Display) -> FileValidation {
    let mut validation = FileValidation::new(path);
    validation.issues.push(Issue::new(
        RuleId::new(FILE_READ_RULE),
        Severity::Error,
        Category::File,
        format!("Failed to read file: {}", error),
    ));
    validation
}
