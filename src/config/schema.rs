//! Configuration schema definitions for wikilint.
//!
//! This module contains the struct definitions that map to the
//! `.wikilint.yml` file format. Every key is optional; the defaults
//! describe the standard wiki migration layout.

use serde::{Deserialize, Serialize};

use crate::lint::fields::{DEFAULT_DEPRECATED, DEFAULT_RECOMMENDED, DEFAULT_REQUIRED};
use crate::lint::rules::breadcrumb::DEFAULT_SCAN_LINES as DEFAULT_BREADCRUMB_LINES;
use crate::lint::rules::frontmatter_fields::{DEFAULT_CATEGORIES, DEFAULT_STATUSES};
use crate::lint::rules::heading_structure::DEFAULT_SCAN_LINES as DEFAULT_HEADING_LINES;

/// Root configuration structure for `.wikilint.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikilintConfig {
    /// Which files to validate and where to save the report
    pub scan: ScanSettings,

    /// Rule tuning
    pub rules: RuleSettings,
}

/// Document discovery settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    /// Top-level directories whose documents are validated
    pub include_dirs: Vec<String>,

    /// File names never validated (case-insensitive)
    pub exclude_files: Vec<String>,

    /// Directory that must exist for a path to count as a docs root
    pub marker_dir: String,

    /// Report file name, relative to the docs root
    pub report_file: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            include_dirs: strings(&["Development", "Technical-Reference", "User-Guide", "Meta"]),
            exclude_files: strings(&["README.md"]),
            marker_dir: "Development".to_string(),
            report_file: "validation-report.txt".to_string(),
        }
    }
}

/// Field table, allowed values and scan windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleSettings {
    /// Fields whose absence is an error
    pub required_fields: Vec<String>,

    /// Fields whose absence is a warning
    pub recommended_fields: Vec<String>,

    /// Fields whose presence is an error
    pub deprecated_fields: Vec<String>,

    /// Accepted `category` values
    pub categories: Vec<String>,

    /// Accepted `status` values
    pub statuses: Vec<String>,

    /// Body lines searched for the breadcrumb
    pub breadcrumb_scan_lines: usize,

    /// Body lines searched for H1 headings
    pub heading_scan_lines: usize,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            required_fields: strings(DEFAULT_REQUIRED),
            recommended_fields: strings(DEFAULT_RECOMMENDED),
            deprecated_fields: strings(DEFAULT_DEPRECATED),
            categories: strings(DEFAULT_CATEGORIES),
            statuses: strings(DEFAULT_STATUSES),
            breadcrumb_scan_lines: DEFAULT_BREADCRUMB_LINES,
            heading_scan_lines: DEFAULT_HEADING_LINES,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: WikilintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, WikilintConfig::default());
    }

    #[test]
    fn default_scan_settings() {
        let scan = ScanSettings::default();
        assert_eq!(
            scan.include_dirs,
            vec!["Development", "Technical-Reference", "User-Guide", "Meta"]
        );
        assert_eq!(scan.exclude_files, vec!["README.md"]);
        assert_eq!(scan.marker_dir, "Development");
        assert_eq!(scan.report_file, "validation-report.txt");
    }

    #[test]
    fn default_rule_settings() {
        let rules = RuleSettings::default();
        assert_eq!(rules.required_fields.len(), 5);
        assert_eq!(rules.recommended_fields, vec!["difficulty", "last_updated", "tags"]);
        assert_eq!(rules.deprecated_fields, vec!["created", "related"]);
        assert_eq!(rules.breadcrumb_scan_lines, 20);
        assert_eq!(rules.heading_scan_lines, 30);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = r#"
rules:
  statuses: [active, review]
scan:
  include_dirs: [Guides]
"#;
        let config: WikilintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.rules.statuses, vec!["active", "review"]);
        assert_eq!(config.rules.categories, RuleSettings::default().categories);
        assert_eq!(config.scan.include_dirs, vec!["Guides"]);
        assert_eq!(config.scan.marker_dir, "Development");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<WikilintConfig, _> = serde_yaml::from_str("rulez: {}");
        assert!(result.is_err());

        let nested: Result<WikilintConfig, _> =
            serde_yaml::from_str("rules:\n  required: [title]");
        assert!(nested.is_err());
    }

    #[test]
    fn round_trips_through_yaml() {
        let config = WikilintConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: WikilintConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
