//! Configuration file discovery and loading.
//!
//! wikilint reads at most one file: the `--config` path when given,
//! otherwise `.wikilint.yml` in the docs root. Without either, the
//! built-in defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::WikilintConfig;
use crate::config::validator::validate_config;
use crate::error::{Result, WikilintError};

/// Name of the per-tree configuration file.
pub const CONFIG_FILE_NAME: &str = ".wikilint.yml";

/// Find the config file for a docs root.
pub fn find_config(docs_root: &Path) -> Option<PathBuf> {
    let path = docs_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into WikilintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if values are inconsistent.
pub fn load_config_file(path: &Path) -> Result<WikilintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WikilintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            WikilintError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;

    let problems = validate_config(&config);
    if !problems.is_empty() {
        let message = problems
            .iter()
            .map(|p| p.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(WikilintError::ConfigValidationError {
            message: format!("{}: {}", path.display(), message),
        });
    }

    Ok(config)
}

/// Parse YAML content into WikilintConfig.
///
/// An empty file is the same as an empty mapping.
pub fn parse_config(content: &str, source_path: &Path) -> Result<WikilintConfig> {
    if content.trim().is_empty() {
        return Ok(WikilintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| WikilintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// docs root is searched and defaults are used when nothing is found.
pub fn load_config(docs_root: &Path, config_override: Option<&Path>) -> Result<WikilintConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_config(docs_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(WikilintConfig::default())
        }
    }
}
