//! Error types for wikilint operations.
//!
//! This module defines [`WikilintError`], the error type used by the CLI
//! driver and configuration layer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems inside a single document are never errors here; they are
//!   reported as [`Issue`](crate::lint::Issue)s on that file's validation
//! - Use `WikilintError` for run-level failures that need distinct handling
//! - Use `anyhow::Error` (via `WikilintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wikilint operations.
#[derive(Debug, Error)]
pub enum WikilintError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The docs root does not exist or is not a directory.
    #[error("Documentation root not found: {path}")]
    DocsRootNotFound { path: PathBuf },

    /// The docs root exists but lacks the marker directory.
    #[error("Not a documentation repository root: {path} (expected '{marker}/' directory)")]
    NotDocsRoot { path: PathBuf, marker: String },

    /// Saving the report file failed.
    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for wikilint operations.
pub type Result<T> = std::result::Result<T, WikilintError>;
