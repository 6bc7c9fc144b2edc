//! Visual theme and styling.

use console::Style;

use crate::lint::output::human::{ERROR_ICON, OK_ICON, WARNING_ICON};

/// wikilint's visual theme.
#[derive(Debug, Clone)]
pub struct WikilintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for section headings (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for WikilintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl WikilintTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("{} {}", OK_ICON, msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("{} {}", WARNING_ICON, msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", ERROR_ICON, msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Color one line of the text report by its leading marker.
    pub fn paint_report_line(&self, line: &str) -> String {
        let body = line.trim_start();
        let style = if body.starts_with('=') {
            &self.dim
        } else if body.starts_with(ERROR_ICON) || body.starts_with("1.") || body.starts_with("2.") {
            &self.error
        } else if body.starts_with(WARNING_ICON) || body.starts_with("3.") {
            &self.warning
        } else if body.starts_with(OK_ICON) {
            &self.success
        } else if !line.starts_with(' ') && line.ends_with(':') {
            &self.highlight
        } else {
            return line.to_string();
        };
        format!("{}", style.apply_to(line))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
