//! Breadcrumb navigation validation.
//!
//! Every migrated page carries one navigation line near the top of its body:
//!
//! ```text
//! [Home](/) > [Development](/Development/) > [Ios](/Development/ios/) > Build Setup
//! ```
//!
//! The line must end in the plain page title. Earlier migration runs wrote
//! `> ---` instead, which this rule reports as an error.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Category, Document, Issue, LintRule, RuleId, Severity};

static BREADCRUMB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Home\]\(/\)\s*>").expect("BREADCRUMB_REGEX must compile"));

pub const DEFAULT_SCAN_LINES: usize = 20;

const STALE_ENDING: &str = "> ---";

/// Validates the breadcrumb line of a document.
#[derive(Debug, Clone)]
pub struct BreadcrumbRule {
    scan_lines: usize,
}

impl BreadcrumbRule {
    pub fn new(scan_lines: usize) -> Self {
        Self { scan_lines }
    }

    /// Locate the breadcrumb: the first body line within the scan window
    /// that starts a `[Home](/) >` chain. Returns its file line number and
    /// trimmed text.
    pub fn find<'a>(&self, doc: &Document<'a>) -> Option<(usize, &'a str)> {
        doc.body_lines(self.scan_lines)
            .find(|(_, line)| BREADCRUMB_REGEX.is_match(line))
            .map(|(number, line)| (number, line.trim()))
    }

    fn issue(&self, severity: Severity, message: impl Into<String>) -> Issue {
        Issue::new(self.id(), severity, Category::Breadcrumb, message)
    }
}

impl Default for BreadcrumbRule {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LINES)
    }
}

impl LintRule for BreadcrumbRule {
    fn id(&self) -> RuleId {
        RuleId::new("breadcrumb")
    }

    fn name(&self) -> &str {
        "Breadcrumb"
    }

    fn description(&self) -> &str {
        "Ensures a '[Home](/) >' breadcrumb ends in the page title and follows the file's directories"
    }

    fn category(&self) -> Category {
        Category::Breadcrumb
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Issue> {
        let suggestion = suggested_breadcrumb(doc.path, doc.title());

        let Some((number, line)) = self.find(doc) else {
            return vec![self
                .issue(
                    Severity::Error,
                    "No breadcrumb found (should start with '[Home](/) >')",
                )
                .with_suggestion(suggestion)];
        };

        let mut issues = Vec::new();

        if line.ends_with(STALE_ENDING) {
            issues.push(
                self.issue(
                    Severity::Error,
                    "Breadcrumb ends with '> ---' (should end with page title)",
                )
                .with_line(number)
                .with_suggestion(suggestion),
            );
        } else {
            let last = line.rsplit('>').next().unwrap_or_default().trim();
            if last.is_empty() || last.starts_with('[') {
                issues.push(
                    self.issue(
                        Severity::Warning,
                        format!("Breadcrumb may be malformed - last segment: '{}'", last),
                    )
                    .with_line(number),
                );
            }
        }

        // Approximate: only the first missing directory is reported.
        if let Some(expected) = directory_titles(doc.path).find(|e| !line.contains(e.as_str())) {
            issues.push(
                self.issue(
                    Severity::Warning,
                    format!(
                        "Breadcrumb may not match file path - expected '{}' in breadcrumb",
                        expected
                    ),
                )
                .with_line(number),
            );
        }

        issues
    }
}

/// Title-case text: the first letter of each alphabetic run is upper case,
/// the rest lower case. `"ios"` becomes `"Ios"`, `"2fa setup"` becomes
/// `"2Fa Setup"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

fn directory_names(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
}

/// The text each directory of `path` is expected to appear as.
pub fn directory_titles(path: &Path) -> impl Iterator<Item = String> + '_ {
    directory_names(path).map(|name| title_case(&name.replace('-', " ")))
}

/// The breadcrumb the migration would write for `path`, ending in `title`
/// (or the title-cased file stem when the page has no title).
pub fn suggested_breadcrumb(path: &Path, title: Option<&str>) -> String {
    let mut parts = vec!["[Home](/)".to_string()];
    let mut href = String::from("/");
    for name in directory_names(path) {
        href.push_str(&name);
        href.push('/');
        parts.push(format!("[{}]({})", title_case(&name.replace('-', " ")), href));
    }

    let page = match title {
        Some(title) => title.to_string(),
        None => path
            .file_stem()
            .map(|stem| title_case(&stem.to_string_lossy().replace('-', " ")))
            .unwrap_or_default(),
    };
    parts.push(page);
    parts.join(" > ")
}
