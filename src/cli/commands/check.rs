//! Check command implementation.
//!
//! The `wikilint check` command validates every page of a documentation
//! tree, prints the report and saves a plain-text copy under the root.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use rayon::prelude::*;

use crate::cli::args::CheckArgs;
use crate::error::{Result, WikilintError};
use crate::lint::{aggregate, render, FileValidation, OutputFormat, Validator};
use crate::scanner::scan_docs;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{
    format_results, load_config_or_report, outcome, parse_format, show_file_status, usage_failure,
};

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(|p| working_dir.join(p)),
            args,
        }
    }

    /// The documentation root this command validates.
    pub fn root(&self) -> PathBuf {
        match &self.args.root {
            Some(root) => self.working_dir.join(root),
            None => self.working_dir.clone(),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn report_path(&self, root: &Path, report_file: &str) -> PathBuf {
        match &self.args.output {
            Some(output) => self.working_dir.join(output),
            None => root.join(report_file),
        }
    }
}

const BANNER_LINES: usize = 3;

/// Insert the generation time under the report's title banner.
pub fn stamped_report(report: &str, generated: DateTime<Local>) -> String {
    let stamp = format!("Generated: {}\n", generated.format("%Y-%m-%d %H:%M:%S"));
    let split = report
        .match_indices('\n')
        .nth(BANNER_LINES - 1)
        .map_or(report.len(), |(i, _)| i + 1);
    let (banner, rest) = report.split_at(split);
    format!("{}{}{}", banner, stamp, rest)
}

fn save_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WikilintError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| WikilintError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.root();

        let Some(config) = load_config_or_report(ui, &root, self.config_path.as_deref())? else {
            return Ok(usage_failure());
        };
        let Some(format) = parse_format(ui, &self.args.format) else {
            return Ok(usage_failure());
        };

        let files = match scan_docs(&root, &config.scan) {
            Ok(files) => files,
            Err(e @ (WikilintError::DocsRootNotFound { .. } | WikilintError::NotDocsRoot { .. })) => {
                ui.error(&e.to_string());
                return Ok(usage_failure());
            }
            Err(e) => return Err(e),
        };

        let human = format == OutputFormat::Human;
        let mode = ui.output_mode();
        if human && mode.shows_report() {
            ui.message(&format!("Scanning directory: {}", root.display()));
            ui.message(&format!("Found {} markdown files to validate", files.len()));
        }

        let validator = Validator::from_settings(&config.rules);
        let validations: Vec<FileValidation> = files
            .par_iter()
            .map(|file| validator.validate_file(&file.path, &file.relative))
            .collect();

        if human && mode.shows_progress() {
            for validation in &validations {
                show_file_status(ui, validation);
            }
        }

        let summary = aggregate(&validations);
        let report = render(&summary, &validations);

        if human {
            ui.report(&report);
        } else {
            let output = format_results(format, &validations, validator.registry())?;
            ui.data(&output);
        }

        if !self.args.no_save {
            let path = self.report_path(&root, &config.scan.report_file);
            save_report(&path, &stamped_report(&report, Local::now()))?;
            if human && mode.shows_report() {
                ui.message(&format!("Report saved to: {}", path.display()));
            }
        }

        tracing::info!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            errors = summary.errors,
            warnings = summary.warnings,
            "Validation finished"
        );

        if human {
            if summary.all_valid() {
                ui.success(&format!("All {} files are valid", summary.total));
            } else {
                ui.error(&format!(
                    "{} of {} files have errors",
                    summary.invalid, summary.total
                ));
            }
        }

        Ok(outcome(&summary, self.args.strict))
    }
}
