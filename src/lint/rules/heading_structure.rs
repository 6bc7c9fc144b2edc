//! Heading structure validation.
//!
//! A page should open with exactly one level-1 heading.

use crate::lint::{Category, Document, Issue, LintRule, RuleId, Severity};

pub const DEFAULT_SCAN_LINES: usize = 30;

/// Checks the number of `# ` headings near the top of the body.
#[derive(Debug, Clone)]
pub struct HeadingStructureRule {
    scan_lines: usize,
}

impl HeadingStructureRule {
    pub fn new(scan_lines: usize) -> Self {
        Self { scan_lines }
    }
}

impl Default for HeadingStructureRule {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LINES)
    }
}

impl LintRule for HeadingStructureRule {
    fn id(&self) -> RuleId {
        RuleId::new("heading-structure")
    }

    fn name(&self) -> &str {
        "Heading Structure"
    }

    fn description(&self) -> &str {
        "Warns when the top of the body has no H1 heading or more than one"
    }

    fn category(&self) -> Category {
        Category::Structure
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, doc: &Document<'_>) -> Vec<Issue> {
        let headings: Vec<usize> = doc
            .body_lines(self.scan_lines)
            .filter(|(_, line)| line.starts_with("# "))
            .map(|(number, _)| number)
            .collect();

        match headings.as_slice() {
            [] => vec![Issue::new(
                self.id(),
                self.default_severity(),
                Category::Structure,
                format!("No H1 heading found in first {} lines", self.scan_lines),
            )],
            [_] => vec![],
            [_, second, ..] => vec![Issue::new(
                self.id(),
                self.default_severity(),
                Category::Structure,
                format!(
                    "Multiple H1 headings found ({}) - should have exactly 1",
                    headings.len()
                ),
            )
            .with_line(*second)],
        }
    }
}
