//! Human-readable report.
//!
//! The report is plain text; terminal colors are added by the UI layer.
//! Layout:
//!
//! - header and summary counts
//! - frontmatter and breadcrumb statistics
//! - "Files with Issues": every invalid file with all of its issues
//! - "Files with Warnings (No Errors)": valid files with their warnings
//! - "Recommendations"

use std::io::Write;

use super::ReportFormatter;
use crate::lint::{aggregate, FileValidation, Issue, Severity, ValidationSummary};

const BAR_WIDTH: usize = 80;

pub const REPORT_TITLE: &str = "Documentation Migration Validation Report";
pub const ERROR_ICON: &str = "✗";
pub const WARNING_ICON: &str = "⚠";
pub const INFO_ICON: &str = "ℹ";
pub const OK_ICON: &str = "✓";

/// Formats results as the text report.
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        validations: &[FileValidation],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let summary = aggregate(validations);
        writer.write_all(render(&summary, validations).as_bytes())
    }
}

/// Plain-text marker for a severity.
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => ERROR_ICON,
        Severity::Warning => WARNING_ICON,
        Severity::Info => INFO_ICON,
    }
}

fn issue_line(issue: &Issue) -> String {
    format!("   {} {}", severity_icon(issue.severity), issue)
}

fn banner(lines: &mut Vec<String>, title: &str) {
    let bar = "=".repeat(BAR_WIDTH);
    lines.push(bar.clone());
    lines.push(title.to_string());
    lines.push(bar);
}

/// Render the text report. The output depends only on the inputs.
pub fn render(summary: &ValidationSummary, validations: &[FileValidation]) -> String {
    let mut lines = Vec::new();
    let total = summary.total;

    banner(&mut lines, REPORT_TITLE);
    lines.push(String::new());

    lines.push("Summary:".to_string());
    lines.push(format!("  Total files validated: {}", total));
    lines.push(format!("  {} Valid files: {}", OK_ICON, summary.valid));
    lines.push(format!("  {} Files with errors: {}", ERROR_ICON, summary.invalid));
    lines.push(format!("  Total errors: {}", summary.errors));
    lines.push(format!("  Total warnings: {}", summary.warnings));
    lines.push(String::new());

    lines.push("Frontmatter Statistics:".to_string());
    lines.push(format!(
        "  New-style frontmatter: {}/{} ({:.1}%)",
        summary.new_style,
        total,
        summary.new_style_percent()
    ));
    lines.push(format!(
        "  Old-style frontmatter: {}/{} ({:.1}%)",
        summary.old_style,
        total,
        summary.old_style_percent()
    ));
    lines.push(format!("  No frontmatter: {}/{}", summary.no_frontmatter, total));
    lines.push(String::new());

    lines.push("Breadcrumb Statistics:".to_string());
    lines.push(format!("  Has breadcrumb: {}/{}", summary.has_breadcrumb, total));
    lines.push(format!("  Valid breadcrumb: {}/{}", summary.valid_breadcrumb, total));
    lines.push(String::new());

    if summary.invalid > 0 {
        banner(&mut lines, "Files with Issues:");
        lines.push(String::new());

        for validation in validations.iter().filter(|v| !v.is_valid()) {
            lines.push(format!("{} {}", ERROR_ICON, validation.path.display()));
            lines.push(format!(
                "   Errors: {}, Warnings: {}",
                validation.error_count(),
                validation.warning_count()
            ));
            lines.extend(validation.issues.iter().map(issue_line));
            lines.push(String::new());
        }
    }

    let warning_only: Vec<_> = validations
        .iter()
        .filter(|v| v.is_valid() && v.warning_count() > 0)
        .collect();
    if !warning_only.is_empty() {
        banner(&mut lines, "Files with Warnings (No Errors):");
        lines.push(String::new());

        for validation in warning_only {
            lines.push(format!(
                "{} {} ({} warnings)",
                WARNING_ICON,
                validation.path.display(),
                validation.warning_count()
            ));
            lines.extend(validation.issues_with(Severity::Warning).map(issue_line));
            lines.push(String::new());
        }
    }

    banner(&mut lines, "Recommendations:");
    lines.push(String::new());
    push_recommendations(&mut lines, summary);
    lines.push("=".repeat(BAR_WIDTH));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_recommendations(lines: &mut Vec<String>, summary: &ValidationSummary) {
    let mut push = |heading: String, bullets: &[&str]| {
        lines.push(heading);
        lines.extend(bullets.iter().map(|b| format!("   - {}", b)));
        lines.push(String::new());
    };

    if summary.old_style > 0 {
        push(
            format!("1. Fix Old-Style Frontmatter ({} files)", summary.old_style),
            &[
                "Remove 'created', 'related', and root-level 'tags' fields",
                "Add required fields: title, description, category, audience, status",
                "Convert [[wikilinks]] to 'related_docs' array",
            ],
        );
    }

    if summary.invalid_not_old_style() > 0 {
        push(
            "2. Fix Malformed Breadcrumbs".to_string(),
            &[
                "Breadcrumbs should end with page title, not '---'",
                "Format: [Home](/) > [Section](/Section/) > Page Title",
            ],
        );
    }

    if summary.warnings > 0 {
        push(
            "3. Address Warnings".to_string(),
            &[
                "Add missing recommended fields (difficulty, last_updated, tags)",
                "Verify breadcrumb paths match file locations",
                "Ensure single H1 heading per document",
            ],
        );
    }
}
