//! JSON output formatter.
//!
//! Formats validation results as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::ReportFormatter;
use crate::lint::{aggregate, FileValidation, Issue, ValidationSummary};

/// Formats results as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
    summary: ValidationSummary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    valid: bool,
    errors: usize,
    warnings: usize,
    has_frontmatter: bool,
    is_new_style: bool,
    is_old_style: bool,
    has_breadcrumb: bool,
    breadcrumb_valid: bool,
    issues: &'a [Issue],
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        validations: &[FileValidation],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let files = validations
            .iter()
            .map(|v| JsonFile {
                path: v.path.display().to_string(),
                valid: v.is_valid(),
                errors: v.error_count(),
                warnings: v.warning_count(),
                has_frontmatter: v.has_frontmatter,
                is_new_style: v.is_new_style,
                is_old_style: v.is_old_style,
                has_breadcrumb: v.has_breadcrumb,
                breadcrumb_valid: v.breadcrumb_valid,
                issues: &v.issues,
            })
            .collect();

        let output = JsonOutput {
            files,
            summary: aggregate(validations),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{validate, validate_unreadable};
    use std::path::Path;

    fn to_json(validations: &[FileValidation]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(validations, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = to_json(&[validate("plain", Path::new("Meta/a.md"))]);

        assert!(parsed["files"].is_array());
        assert_eq!(parsed["files"][0]["path"], "Meta/a.md");
        assert_eq!(parsed["files"][0]["valid"], false);
        assert_eq!(parsed["summary"]["total"], 1);
        assert_eq!(parsed["summary"]["invalid"], 1);
    }

    #[test]
    fn issues_carry_rule_severity_and_category() {
        let parsed = to_json(&[validate_unreadable(Path::new("Meta/x.md"), "denied")]);
        let issue = &parsed["files"][0]["issues"][0];

        assert_eq!(issue["rule_id"], "file-read");
        assert_eq!(issue["severity"], "error");
        assert_eq!(issue["category"], "file");
        assert_eq!(issue["message"], "Failed to read file: denied");
    }

    #[test]
    fn includes_line_only_when_known() {
        let content = "---\ntitle: Foo\n---\n[Home](/) > [Meta](/Meta/) > ---\n# Foo\n";
        let parsed = to_json(&[validate(content, Path::new("Meta/foo.md"))]);

        let issues = parsed["files"][0]["issues"].as_array().unwrap();
        let breadcrumb = issues
            .iter()
            .find(|i| i["category"] == "breadcrumb")
            .unwrap();
        assert_eq!(breadcrumb["line"], 4);

        let missing = issues
            .iter()
            .find(|i| i["category"] == "frontmatter")
            .unwrap();
        assert!(missing["line"].is_null());
    }

    #[test]
    fn empty_run() {
        let parsed = to_json(&[]);
        assert_eq!(parsed["files"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
