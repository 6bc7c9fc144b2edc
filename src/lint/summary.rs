//! Run-level statistics.

use serde::Serialize;

use super::validation::FileValidation;

/// Counts folded over every file of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub errors: usize,
    pub warnings: usize,
    pub new_style: usize,
    pub old_style: usize,
    pub no_frontmatter: usize,
    pub has_breadcrumb: usize,
    pub valid_breadcrumb: usize,
}

impl ValidationSummary {
    pub fn aggregate(validations: &[FileValidation]) -> Self {
        validations.iter().fold(Self::default(), |mut s, v| {
            s.total += 1;
            if v.is_valid() {
                s.valid += 1;
            } else {
                s.invalid += 1;
            }
            s.errors += v.error_count();
            s.warnings += v.warning_count();
            s.new_style += usize::from(v.is_new_style);
            s.old_style += usize::from(v.is_old_style);
            s.no_frontmatter += usize::from(!v.has_frontmatter);
            s.has_breadcrumb += usize::from(v.has_breadcrumb);
            s.valid_breadcrumb += usize::from(v.breadcrumb_valid);
            s
        })
    }

    /// `count` as a percentage of all files; 0.0 for an empty run.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total as f64
        }
    }

    pub fn new_style_percent(&self) -> f64 {
        self.percent(self.new_style)
    }

    pub fn old_style_percent(&self) -> f64 {
        self.percent(self.old_style)
    }

    /// Invalid files not explained by legacy frontmatter.
    pub fn invalid_not_old_style(&self) -> usize {
        self.invalid.saturating_sub(self.old_style)
    }

    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Fold per-file results into a [`ValidationSummary`].
pub fn aggregate(validations: &[FileValidation]) -> ValidationSummary {
    ValidationSummary::aggregate(validations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::validation::{validate, validate_unreadable};
    use std::path::Path;

    const VALID: &str = "---\ntitle: A\ndescription: B\ncategory: meta\naudience: all\nstatus: draft\ndifficulty: easy\nlast_updated: 2024-01-01\ntags: [a]\n---\n[Home](/) > [Meta](/Meta/) > A\n# A\n";

    #[test]
    fn empty_run_has_zero_percentages() {
        let summary = aggregate(&[]);
        assert_eq!(summary, ValidationSummary::default());
        assert_eq!(summary.new_style_percent(), 0.0);
        assert_eq!(summary.old_style_percent(), 0.0);
        assert!(summary.all_valid());
    }

    #[test]
    fn counts_each_flag() {
        let validations = vec![
            validate(VALID, Path::new("Meta/a.md")),
            validate("# no frontmatter\n", Path::new("Meta/b.md")),
            validate(
                &VALID.replace("tags: [a]", "created: 2020-01-01"),
                Path::new("Meta/c.md"),
            ),
            validate_unreadable(Path::new("Meta/d.md"), "permission denied"),
        ];

        let summary = aggregate(&validations);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 3);
        assert_eq!(summary.new_style, 1);
        assert_eq!(summary.old_style, 1);
        assert_eq!(summary.no_frontmatter, 2);
        assert_eq!(summary.has_breadcrumb, 2);
        assert_eq!(summary.valid_breadcrumb, 2);
        assert_eq!(summary.invalid_not_old_style(), 2);
        assert_eq!(summary.percent(1), 25.0);
        assert!(!summary.all_valid());
    }

    #[test]
    fn totals_match_per_file_counts() {
        let validations = vec![
            validate(VALID, Path::new("Meta/a.md")),
            validate(&VALID.replace("difficulty: easy\n", ""), Path::new("Meta/b.md")),
            validate("plain", Path::new("Meta/c.md")),
        ];

        let summary = aggregate(&validations);
        let errors: usize = validations.iter().map(|v| v.error_count()).sum();
        let warnings: usize = validations.iter().map(|v| v.warning_count()).sum();
        assert_eq!(summary.errors, errors);
        assert_eq!(summary.warnings, warnings);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.errors, 1);
    }
}
