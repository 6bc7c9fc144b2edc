//! Shared helpers for the validation commands.
//!
//! `check`, `file` and `rules` all load the same configuration, and the
//! first two render results the same way.

use std::path::Path;

use crate::config::{load_config, WikilintConfig};
use crate::error::{Result, WikilintError};
use crate::lint::{
    FileValidation, HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, RuleRegistry,
    SarifFormatter, ValidationSummary,
};
use crate::ui::UserInterface;

use super::dispatcher::{CommandResult, EXIT_INVALID, EXIT_USAGE};

/// Load the configuration, reporting config problems to the user.
///
/// Returns `Ok(None)` when the config was missing or invalid; the caller
/// should exit with [`EXIT_USAGE`].
pub fn load_config_or_report(
    ui: &mut dyn UserInterface,
    root: &Path,
    config_path: Option<&Path>,
) -> Result<Option<WikilintConfig>> {
    match load_config(root, config_path) {
        Ok(config) => Ok(Some(config)),
        Err(
            e @ (WikilintError::ConfigNotFound { .. }
            | WikilintError::ConfigParseError { .. }
            | WikilintError::ConfigValidationError { .. }),
        ) => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Parse `--format`, reporting an unknown value to the user.
pub fn parse_format(ui: &mut dyn UserInterface, format: &str) -> Option<OutputFormat> {
    match format.parse() {
        Ok(format) => Some(format),
        Err(message) => {
            ui.error(&message);
            None
        }
    }
}

/// Render results with the formatter for `format`.
pub fn format_results(
    format: OutputFormat,
    validations: &[FileValidation],
    registry: &RuleRegistry,
) -> Result<String> {
    let mut output = Vec::new();
    match format {
        OutputFormat::Human => HumanFormatter::new().format(validations, &mut output)?,
        OutputFormat::Json => JsonFormatter::new().format(validations, &mut output)?,
        OutputFormat::Sarif => SarifFormatter::new("wikilint", env!("CARGO_PKG_VERSION"))
            .with_rules(registry)
            .format(validations, &mut output)?,
    }
    String::from_utf8(output).map_err(|e| WikilintError::Other(e.into()))
}

/// One line per file for verbose progress output.
pub fn show_file_status(ui: &mut dyn UserInterface, validation: &FileValidation) {
    let path = validation.path.display();
    if !validation.is_valid() {
        ui.error(&format!(
            "{} ({} errors, {} warnings)",
            path,
            validation.error_count(),
            validation.warning_count()
        ));
    } else if validation.warning_count() > 0 {
        ui.warning(&format!("{} ({} warnings)", path, validation.warning_count()));
    } else {
        ui.success(&path.to_string());
    }
}

/// Exit status for a finished run.
pub fn outcome(summary: &ValidationSummary, strict: bool) -> CommandResult {
    if summary.invalid > 0 || (strict && summary.warnings > 0) {
        CommandResult::failure(EXIT_INVALID)
    } else {
        CommandResult::success()
    }
}

/// The failure returned after a usage problem was reported.
pub fn usage_failure() -> CommandResult {
    CommandResult::failure(EXIT_USAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{aggregate, validate};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const WARN_ONLY: &str = "---\ntitle: A\ndescription: B\ncategory: meta\naudience: all\nstatus: draft\n---\n[Home](/) > [Meta](/Meta/) > A\n# A\n";

    #[test]
    fn config_errors_are_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".wikilint.yml"), "bogus: true\n").unwrap();
        let mut ui = MockUI::new();

        let config = load_config_or_report(&mut ui, temp.path(), None).unwrap();
        assert!(config.is_none());
        assert!(ui.has_error("Failed to parse config"));
    }

    #[test]
    fn unknown_format_is_reported() {
        let mut ui = MockUI::new();
        assert_eq!(parse_format(&mut ui, "sarif"), Some(OutputFormat::Sarif));
        assert_eq!(parse_format(&mut ui, "yaml"), None);
        assert!(ui.has_error("Unknown output format"));
    }

    #[test]
    fn strict_turns_warnings_into_failure() {
        let validations = vec![validate(WARN_ONLY, Path::new("Meta/a.md"))];
        let summary = aggregate(&validations);
        assert_eq!(summary.invalid, 0);
        assert!(summary.warnings > 0);

        assert_eq!(outcome(&summary, false).exit_code, 0);
        assert_eq!(outcome(&summary, true).exit_code, EXIT_INVALID);
    }

    #[test]
    fn file_status_by_result() {
        let mut ui = MockUI::new();
        show_file_status(&mut ui, &validate(WARN_ONLY, Path::new("Meta/a.md")));
        show_file_status(&mut ui, &validate("x", Path::new("Meta/b.md")));

        assert!(ui.has_warning("Meta/a.md (3 warnings)"));
        assert!(ui.has_error("Meta/b.md (1 errors, 0 warnings)"));
    }

    #[test]
    fn json_results_parse() {
        let validations = vec![validate("x", Path::new("Meta/b.md"))];
        let text =
            format_results(OutputFormat::Json, &validations, &RuleRegistry::with_builtins())
                .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["summary"]["invalid"], 1);
    }
}
