//! Rules command implementation.
//!
//! The `wikilint rules` command lists the registered validation rules.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{load_config_or_report, usage_failure};

/// The rules command implementation.
pub struct RulesCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(|p| working_dir.join(p)),
        }
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) =
            load_config_or_report(ui, &self.working_dir, self.config_path.as_deref())?
        else {
            return Ok(usage_failure());
        };

        let registry = RuleRegistry::from_settings(&config.rules);
        let width = registry
            .iter()
            .map(|rule| rule.id().as_str().len())
            .max()
            .unwrap_or(0);

        ui.show_header("Validation rules");
        for rule in registry.iter() {
            ui.message(&format!(
                "{:<width$}  {:<7}  {}: {}",
                rule.id().as_str(),
                rule.default_severity().as_str(),
                rule.name(),
                rule.description(),
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}
