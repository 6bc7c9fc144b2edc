//! Frontmatter shape validation.
//!
//! Checks the frontmatter block against the field table: required and
//! recommended fields must be present, deprecated fields and wikilinks must
//! be gone, and `category`/`status` should use a known value.

use crate::lint::fields::{contains_wikilink, FieldRequirement, FieldTable};
use crate::lint::frontmatter;
use crate::lint::{Category, Document, Issue, LintRule, RuleId, Severity};

pub const DEFAULT_CATEGORIES: &[&str] = &["development", "user-guide", "technical-reference", "meta"];
pub const DEFAULT_STATUSES: &[&str] = &["active", "draft", "archived", "deprecated"];

const RULE_ID: &str = "frontmatter-fields";

/// Validates frontmatter fields and values.
#[derive(Debug, Clone)]
pub struct FrontmatterFieldsRule {
    fields: FieldTable,
    categories: Vec<String>,
    statuses: Vec<String>,
}

impl FrontmatterFieldsRule {
    pub fn new(fields: FieldTable, categories: Vec<String>, statuses: Vec<String>) -> Self {
        Self {
            fields,
            categories,
            statuses,
        }
    }

    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// The issue reported for a document without a frontmatter block.
    pub fn missing_frontmatter() -> Issue {
        Issue::new(
            RuleId::new(RULE_ID),
            Severity::Error,
            Category::Frontmatter,
            "Missing frontmatter opening '---'",
        )
        .with_suggestion("Start the file with a '---' fenced block holding title, description, category, audience and status")
    }

    fn issue(&self, severity: Severity, message: impl Into<String>) -> Issue {
        Issue::new(self.id(), severity, Category::Frontmatter, message)
    }

    fn check_value(&self, frontmatter: &str, key: &str, allowed: &[String]) -> Option<Issue> {
        let value = frontmatter::scalar(frontmatter, key)?;
        if allowed.iter().any(|a| a == value) {
            return None;
        }
        Some(self.issue(
            Severity::Warning,
            format!(
                "Unusual {} value: '{}' (valid: {})",
                key,
                value,
                allowed.join(", ")
            ),
        ))
    }
}

impl Default for FrontmatterFieldsRule {
    fn default() -> Self {
        Self::new(
            FieldTable::with_defaults(),
            DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl LintRule for FrontmatterFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new(RULE_ID)
    }

    fn name(&self) -> &str {
        "Frontmatter Fields"
    }

    fn description(&self) -> &str {
        "Ensures frontmatter has the required fields, no legacy fields, and known category/status values"
    }

    fn category(&self) -> Category {
        Category::Frontmatter
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Issue> {
        let fm = doc.frontmatter;
        if fm.is_empty() {
            return vec![Self::missing_frontmatter()];
        }

        let mut issues = Vec::new();

        if self.fields.legacy_signals(fm).is_old_style() {
            issues.push(
                self.issue(
                    Severity::Error,
                    "Found old Obsidian-style frontmatter (needs migration)",
                )
                .with_suggestion(
                    "Remove 'created', 'related' and root-level 'tags' fields; convert [[wikilinks]] to a 'related_docs' array",
                ),
            );
        }

        for field in self.fields.iter() {
            let present = field.is_present(fm);
            match (field.requirement, present) {
                (FieldRequirement::Required, false) => issues.push(self.issue(
                    Severity::Error,
                    format!("Missing required field: {}", field.name),
                )),
                (FieldRequirement::Recommended, false) => issues.push(self.issue(
                    Severity::Warning,
                    format!("Missing recommended field: {}", field.name),
                )),
                (FieldRequirement::Deprecated, true) => issues.push(self.issue(
                    Severity::Error,
                    format!(
                        "Found deprecated field: {} (should be removed or converted)",
                        field.name
                    ),
                )),
                _ => {}
            }
        }

        if contains_wikilink(fm) {
            issues.push(self.issue(
                Severity::Error,
                "Found wikilink syntax [[...]] (should use 'related_docs' array)",
            ));
        }

        issues.extend(self.check_value(fm, "category", &self.categories));
        issues.extend(self.check_value(fm, "status", &self.statuses));

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::frontmatter::extract;
    use std::path::Path;

    const COMPLETE: &str = "title: \"Foo\"\ndescription: \"Bar\"\ncategory: \"development\"\naudience: \"devs\"\nstatus: \"active\"\ndifficulty: beginner\nlast_updated: 2024-05-01\ntags: [ios]";

    fn check(frontmatter: &str) -> Vec<Issue> {
        let content = format!("---\n{}\n---\n# Foo\n", frontmatter);
        let extracted = extract(&content);
        let doc = Document::new(Path::new("Development/foo.md"), &extracted);
        FrontmatterFieldsRule::default().check(&doc)
    }

    fn errors(issues: &[Issue]) -> Vec<&Issue> {
        issues.iter().filter(|i| i.is_error()).collect()
    }

    #[test]
    fn complete_frontmatter_has_no_issues() {
        assert!(check(COMPLETE).is_empty());
    }

    #[test]
    fn required_fields_only_yields_no_errors() {
        let fm = "title: Foo\ndescription: Bar\ncategory: meta\naudience: all\nstatus: draft";
        let issues = check(fm);
        assert!(errors(&issues).is_empty());
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn missing_status_is_a_single_error() {
        let fm = COMPLETE.replace("status: \"active\"\n", "");
        let issues = check(&fm);
        let errs = errors(&issues);

        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].message, "Missing required field: status");
        assert_eq!(errs[0].category, Category::Frontmatter);
    }

    #[test]
    fn created_field_is_an_error() {
        let fm = format!("{}\ncreated: \"2024-01-01\"", COMPLETE);
        let issues = check(&fm);

        assert!(issues
            .iter()
            .any(|i| i.is_error() && i.category == Category::Frontmatter));
        assert!(issues
            .iter()
            .any(|i| i.message.starts_with("Found deprecated field: created")));
        assert!(issues.iter().any(|i| i.message.contains("old Obsidian-style")));
    }

    #[test]
    fn block_list_fields_are_present() {
        let fm = COMPLETE.replace("tags: [ios]", "tags:\n  - ios\nrelated:\n  - other");
        let issues = check(&fm);

        assert!(!issues
            .iter()
            .any(|i| i.message == "Missing recommended field: tags"));
        assert!(issues
            .iter()
            .any(|i| i.is_error() && i.message.starts_with("Found deprecated field: related")));
    }

    #[test]
    fn wikilinks_are_errors() {
        let fm = format!("{}\nsee_also: \"[[Other Page]]\"", COMPLETE);
        let issues = check(&fm);

        assert!(issues
            .iter()
            .any(|i| i.is_error() && i.message.contains("wikilink syntax")));
    }

    #[test]
    fn unusual_category_is_a_warning() {
        let fm = COMPLETE.replace("\"development\"", "\"marketing\"");
        let issues = check(&fm);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("Unusual category value: 'marketing'"));
    }

    #[test]
    fn hyphenated_category_is_accepted() {
        let fm = COMPLETE.replace("\"development\"", "user-guide");
        assert!(check(&fm).is_empty());
    }

    #[test]
    fn unusual_status_is_a_warning() {
        let fm = COMPLETE.replace("\"active\"", "'wip'");
        let issues = check(&fm);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("Unusual status value: 'wip'"));
    }

    #[test]
    fn empty_frontmatter_short_circuits() {
        let extracted = extract("# No frontmatter\n");
        let doc = Document::new(Path::new("Development/foo.md"), &extracted);
        let issues = FrontmatterFieldsRule::default().check(&doc);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].message, "Missing frontmatter opening '---'");
    }

    #[test]
    fn custom_value_lists() {
        let rule = FrontmatterFieldsRule::new(
            FieldTable::from_lists(&["title"], &[], &[]),
            vec!["guides".to_string()],
            vec!["live".to_string()],
        );
        let extracted = extract("---\ntitle: Foo\ncategory: guides\nstatus: live\n---\n");
        let doc = Document::new(Path::new("a.md"), &extracted);
        assert!(rule.check(&doc).is_empty());
    }
}
