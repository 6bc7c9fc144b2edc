//! Configuration loading, parsing, and validation for wikilint.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use wikilint::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".wikilint.yml"), "rules:\n  statuses: [active]\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.rules.statuses, vec!["active".to_string()]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{RuleSettings, ScanSettings, WikilintConfig};
pub use validator::{validate_config, ValidationError};
