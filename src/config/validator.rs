//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Scan windows must cover at least one line
//! - A field may only appear in one of the required/recommended/deprecated lists
//! - `include_dirs` and the allowed value lists must not be empty

use std::collections::HashSet;

use crate::config::schema::WikilintConfig;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &WikilintConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_windows(config));
    errors.extend(validate_field_lists(config));
    errors.extend(validate_non_empty(config));

    errors
}

fn validate_windows(config: &WikilintConfig) -> Vec<ValidationError> {
    let rules = &config.rules;
    [
        ("breadcrumb_scan_lines", rules.breadcrumb_scan_lines),
        ("heading_scan_lines", rules.heading_scan_lines),
    ]
    .into_iter()
    .filter(|(_, lines)| *lines == 0)
    .map(|(key, _)| ValidationError::new("scan-window", format!("{} must be at least 1", key)))
    .collect()
}

fn validate_field_lists(config: &WikilintConfig) -> Vec<ValidationError> {
    let rules = &config.rules;
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    let all = rules
        .required_fields
        .iter()
        .chain(&rules.recommended_fields)
        .chain(&rules.deprecated_fields);
    for field in all {
        if field.trim().is_empty() {
            errors.push(ValidationError::new("field-name", "Field names must not be empty"));
        } else if !seen.insert(field.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-field",
                format!("Field '{}' is listed more than once", field),
            ));
        }
    }

    errors
}

fn validate_non_empty(config: &WikilintConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.scan.include_dirs.is_empty() {
        errors.push(ValidationError::new(
            "empty-list",
            "scan.include_dirs must name at least one directory",
        ));
    }
    if config.rules.categories.is_empty() {
        errors.push(ValidationError::new(
            "empty-list",
            "rules.categories must not be empty",
        ));
    }
    if config.rules.statuses.is_empty() {
        errors.push(ValidationError::new("empty-list", "rules.statuses must not be empty"));
    }

    errors
}
