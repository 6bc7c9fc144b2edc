//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// wikilint - Validate migrated documentation pages.
#[derive(Debug, Parser)]
#[command(name = "wikilint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides <root>/.wikilint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show per-file progress
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final status line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate every page of a documentation tree (default if no command specified)
    Check(CheckArgs),

    /// Validate a single page
    File(FileArgs),

    /// List the validation rules
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Documentation root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Output format: human, json, sarif
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Where to save the text report (defaults to <root>/validation-report.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't save the text report
    #[arg(long)]
    pub no_save: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            root: None,
            format: "human".to_string(),
            output: None,
            no_save: false,
            strict: false,
        }
    }
}

/// Arguments for the `file` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FileArgs {
    /// Page to validate
    pub path: PathBuf,

    /// Path to report the page as, relative to the docs root
    #[arg(long = "as", value_name = "PATH")]
    pub logical_path: Option<PathBuf>,

    /// Output format: human, json, sarif
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
