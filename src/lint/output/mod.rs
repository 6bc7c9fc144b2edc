//! Report formatters.
//!
//! This module provides formatters for writing validation results in
//! different formats (human-readable report, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use std::io::Write;
use std::str::FromStr;

use crate::lint::FileValidation;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: human, json, sarif",
                s
            )),
        }
    }
}

/// Trait for formatting validation results.
pub trait ReportFormatter {
    /// Format the per-file results to the given writer.
    fn format<W: Write>(
        &self,
        validations: &[FileValidation],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::{render, HumanFormatter};
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
