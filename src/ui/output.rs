//! Output mode.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the report plus per-file progress.
    Verbose,
    /// Show the report and status lines.
    #[default]
    Normal,
    /// Show status lines and errors only; the report is still saved.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick the mode from the global `--verbose` / `--quiet` flags.
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-file progress.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode prints the full report.
    pub fn shows_report(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
