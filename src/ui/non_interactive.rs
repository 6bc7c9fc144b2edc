//! Non-interactive UI for CI/headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation for pipes and CI logs.
///
/// Output is plain text. Warnings and errors go to stderr so that
/// machine-readable output on stdout stays parseable.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_report() {
            println!("\n{}\n", title);
        }
    }

    fn report(&mut self, text: &str) {
        if self.mode.shows_report() {
            print!("{}", text);
        }
    }

    fn data(&mut self, text: &str) {
        print!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_output_mode_changes_mode() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        ui.set_output_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_mode_output_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.show_header("wikilint");
        ui.report("report body\n");
        ui.message("message");
        ui.error("error");
    }
}
