//! File command implementation.
//!
//! The `wikilint file` command validates a single page. Breadcrumb checks
//! compare against the page's logical path inside the docs tree, which
//! `--as` can supply for pages that live elsewhere on disk.

use std::path::{Path, PathBuf};

use crate::cli::args::FileArgs;
use crate::error::Result;
use crate::lint::output::human::severity_icon;
use crate::lint::{aggregate, FileValidation, OutputFormat, Validator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{format_results, load_config_or_report, outcome, parse_format, usage_failure};

/// The file command implementation.
pub struct FileCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: FileArgs,
}

impl FileCommand {
    /// Create a new file command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: FileArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(|p| working_dir.join(p)),
            args,
        }
    }

    fn fs_path(&self) -> PathBuf {
        self.working_dir.join(&self.args.path)
    }

    /// The path the page is validated as: `--as`, else its path below the
    /// working directory, else the path as given.
    pub fn logical_path(&self) -> PathBuf {
        if let Some(logical) = &self.args.logical_path {
            return logical.clone();
        }
        self.fs_path()
            .strip_prefix(&self.working_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.args.path.clone())
    }

    fn show_human(&self, ui: &mut dyn UserInterface, validation: &FileValidation) {
        let path = validation.path.display().to_string();
        if !validation.is_valid() {
            ui.error(&path);
        } else if validation.warning_count() > 0 {
            ui.warning(&path);
        } else {
            ui.success(&path);
        }

        if !ui.output_mode().shows_report() {
            return;
        }
        for issue in &validation.issues {
            ui.message(&format!("   {} {}", severity_icon(issue.severity), issue));
            if let Some(suggestion) = &issue.suggestion {
                ui.message(&format!("      = help: {}", suggestion));
            }
        }
    }
}

impl Command for FileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fs_path = self.fs_path();
        if !fs_path.is_file() {
            ui.error(&format!("File not found: {}", fs_path.display()));
            return Ok(usage_failure());
        }

        let Some(config) =
            load_config_or_report(ui, &self.working_dir, self.config_path.as_deref())?
        else {
            return Ok(usage_failure());
        };
        let Some(format) = parse_format(ui, &self.args.format) else {
            return Ok(usage_failure());
        };

        let validator = Validator::from_settings(&config.rules);
        let validation = validator.validate_file(&fs_path, &self.logical_path());
        tracing::debug!(
            "{}: {} errors, {} warnings",
            validation.path.display(),
            validation.error_count(),
            validation.warning_count()
        );

        let validations = [validation];
        match format {
            OutputFormat::Human => self.show_human(ui, &validations[0]),
            _ => {
                let output = format_results(format, &validations, validator.registry())?;
                ui.data(&output);
            }
        }

        Ok(outcome(&aggregate(&validations), self.args.strict))
    }
}
